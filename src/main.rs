use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use trivia::questions::OpenTdbSource;
use trivia::tui;

#[derive(Parser)]
#[command(name = "trivia", about = "Multiple-choice trivia quiz in the terminal")]
struct Args {
    /// HTTP timeout for the trivia service, in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to trivia.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("trivia.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Trivia quiz starting up (timeout: {}s)", args.timeout);

    let source = Arc::new(OpenTdbSource::new(
        None,
        Duration::from_secs(args.timeout),
    ));
    tui::run(source)
}
