use clap::Parser;

use monografi::config::{Cli, Command};
use monografi::dimensions::{DimensionRegistry, LabelSource};
use monografi::error::Error;
use monografi::input::load_roster;
use monografi::pipeline::build_reports;
use monografi::report::write_reports;
use monografi::{FALLBACK_LABEL, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let registry = DimensionRegistry::builtin()?;

    match cli.command {
        Command::Dimensions => {
            for dim in registry.iter() {
                let labels = match dim.label_source() {
                    LabelSource::Declared(list) => list.join(", "),
                    LabelSource::Observed => "(taken from the roster)".to_string(),
                };
                println!("{:<16} {:<32} {}", dim.id(), dim.title(), labels);
            }
            println!("Records matching no label are counted under `{FALLBACK_LABEL}`.");
            Ok(())
        }
        Command::Run(args) => {
            let today = chrono::Local::now().date_naive();
            let config = args.into_config(today);
            let dimensions = config.select(&registry)?;
            let records = load_roster(&config.roster)?;

            tracing::info!(
                records = records.len(),
                dimensions = dimensions.len(),
                as_of = %config.evaluated_on,
                "building reports"
            );
            let reports = build_reports(&records, &dimensions, config.evaluated_on);

            for report in &reports {
                let written =
                    write_reports(report, &config.out_dir, &config.formats, &config.settings)?;
                tracing::info!(
                    dimension = report.dimension().id(),
                    files = written.len(),
                    "report written"
                );
            }
            Ok(())
        }
    }
}
