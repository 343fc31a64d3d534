use clap::Parser;
use tracing::{info, warn};
use winit::event_loop::{ControlFlow, EventLoop};

use jbe::app::{App, AppConfig};
use jbe::{build_info, health, logging};

/// Opens a window and tracks keyboard, mouse and controller input.
/// F toggles fullscreen, Q quits.
#[derive(Parser)]
#[command(name = "jbe-demo", version, about)]
struct Cli {
    /// Configuration profile (overrides APP_PROFILE)
    #[arg(long)]
    profile: Option<String>,

    /// Run the health checks, print the report and exit
    #[arg(long)]
    health: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            let profile = cli.profile.as_deref().unwrap_or("release");
            (AppConfig::builtin(profile), Some(e))
        }
    };

    logging::init(&config.logging.filter);
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using default configuration");
    }

    if cli.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    info!(version = %build_info::version_string(), "jbe-demo");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
