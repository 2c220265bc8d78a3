use std::path::PathBuf;

use clap::{Parser, ValueHint};

#[derive(Parser)]
#[clap(version)]
#[clap(about = "Planar arm inverse-kinematics controller daemon", long_about = None)]
struct Args {
    /// Configuration file.
    #[clap(short = 'c', long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Link length in source units.
    #[clap(long, value_name = "LENGTH")]
    link_length: Option<f64>,

    /// Control tick interval in milliseconds.
    #[clap(long, value_name = "MS")]
    tick_interval: Option<u64>,

    /// Run as systemd service.
    #[clap(long)]
    systemd: bool,

    /// Level of verbosity.
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let local_config = std::env::current_dir()?.join("armctld.toml");

    // Try read configuration from global system location first, then from local directory.
    let mut config_paths = vec![
        PathBuf::from("/etc/armctl/armctld.toml"),
        local_config,
    ];
    if let Some(path) = args.config {
        config_paths.insert(0, path);
    }

    let mut config = armctl::Config::try_from_file(config_paths)?;

    if let Some(link_length) = args.link_length {
        config.link_length = link_length;
    }
    if let Some(tick_interval) = args.tick_interval {
        config.tick_interval_ms = tick_interval;
    }

    let mut log_config = simplelog::ConfigBuilder::new();
    if args.systemd {
        log_config.set_time_level(log::LevelFilter::Off);
        log_config.set_thread_level(log::LevelFilter::Off);
    }

    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);
    log_config.add_filter_ignore_str("mio");

    let log_level = if args.systemd {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let color_choice = if args.systemd {
        simplelog::ColorChoice::Never
    } else {
        simplelog::ColorChoice::Auto
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        color_choice,
    )?;

    log::info!("Starting armctld {}", armctl::consts::VERSION);
    log::trace!("{}", config);

    armctl::start_daemon(config).await?;

    Ok(())
}
