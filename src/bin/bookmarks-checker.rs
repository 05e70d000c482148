use clap::Parser;
use bookmarks_checker::config::{CliConfig, Config};
use bookmarks_checker::core::error::Result;
use bookmarks_checker::discovery::{BookmarkExtractor, LinkIndex, dispatchable};
use bookmarks_checker::reporting::logging;
use bookmarks_checker::reporting::{Aggregator, ObservedOutcome, ReportMode};
use bookmarks_checker::ui::output;
use bookmarks_checker::ui::{Cli, cli_to_config};
use bookmarks_checker::validation::check_records;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Extract, check and report. Individual dead links never change the exit code.
async fn run(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.is_verbose(), config.is_json());
    logging::log_config_info(&config);

    let extracted = BookmarkExtractor::default()
        .extract_from_file(&cli.file)
        .inspect_err(|e| logging::log_error("Could not extract links", Some(e)))?;
    let extracted_count = extracted.len();
    let records = dispatchable(extracted, &config.skip_schemes());
    logging::log_extraction(&cli.file, extracted_count, records.len());

    let mode = ReportMode::from_verbose(config.is_verbose());
    let json = config.is_json();

    if !json {
        print!("{}", output::check_header(records.len(), mode));
    }

    let mut aggregator = Aggregator::new()
        .with_mode(mode)
        .with_index(LinkIndex::from_records(&records));
    if !json {
        aggregator = aggregator.with_listener(move |observed: &ObservedOutcome| {
            println!("{}", output::outcome_line(observed, mode));
        });
    }

    let report = check_records(records, &config, aggregator).await?;

    if json {
        println!("{}", output::json_report(&report)?);
    } else {
        print!("{}", output::summary(&report));
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI arguments take precedence over the file
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
