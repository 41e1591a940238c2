use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueHint};
use datascan::Result;
use datascan::commands::scan;
use datascan::config::ScanConfig;
use datascan::{args, logging};

#[derive(Parser)]
#[command(name = "datascan")]
#[command(about = "Find files in checkouts that carry a data/ directory, and optionally git pull them")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Emit progress lines for each step on stderr
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    log: bool,

    /// Run `git pull` in directories where a file was found
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    git_pull: bool,

    /// File name glob to search for (may be given multiple times) [default: summary.txt]
    #[arg(
        long = "file",
        value_name = "PATTERN",
        value_hint = ValueHint::Other,
        allow_hyphen_values = true
    )]
    files: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(args::normalize(std::env::args_os()));

    logging::init(cli.log);

    let config = ScanConfig::from_flags(cli.log, cli.git_pull, cli.files);
    scan::run_scan(&config)?;

    Ok(())
}
