use clap::Parser;
use tracing_subscriber::EnvFilter;

use bertrand_airlines::config::{ReportFormat, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "simulate")]
struct Args {
    #[arg(long, default_value = "config/example.yaml")]
    config: String,
    /// Overrides `report.format` from the scenario file.
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
    /// Also print the cumulative demand schedule.
    #[arg(long)]
    schedule: bool,
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let scenario = ScenarioConfig::load(&args.config)?;
    let mut market = scenario.build_market()?;
    let report = market.clear_market()?;

    let format = args.format.unwrap_or(scenario.report.format);
    let show_schedule = args.schedule || scenario.report.schedule;
    match format {
        ReportFormat::Table => {
            println!("{report}");
            if show_schedule {
                println!("{:>8} {:>8}", "P", "Q");
                for point in market.demand().schedule()? {
                    println!("{:>8} {:>8}", point.price, point.quantity);
                }
            }
        }
        ReportFormat::Json => {
            let schedule = if show_schedule {
                Some(market.demand().schedule()?)
            } else {
                None
            };
            let out = serde_json::json!({ "report": report, "schedule": schedule });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
