use clap::Parser;
use flappy_terminal::build_info;
use flappy_terminal::GameConfig;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flappy-terminal",
    version = build_info::VERSION_LINE,
    about = "Guide a growing bird through scrolling spikes"
)]
struct Args {
    /// Never end the game on a crash (score and evolution keep working)
    #[arg(long)]
    invincible: bool,

    /// Seed for obstacle gaps, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log to this file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // The terminal is the game display, so logs only go to a file on request
    if let Some(path) = &args.log {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
            }
            Err(e) => eprintln!("Warning: could not open log file {}: {}", path.display(), e),
        }
    }

    let config = GameConfig {
        invincible: args.invincible,
        seed: args.seed,
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "flappy-terminal {} starting (invincible: {}, seed: {:?})",
        build_info::VERSION_LINE,
        config.invincible,
        config.seed
    );

    flappy_terminal::app::run(config)?;

    log::info!("terminal restored, exiting");
    Ok(())
}
