//! tablet-mode CLI
//!
//! Usage:
//!   tablet-mode            # Drive the virtual SW_TABLET_MODE switch
//!   tablet-mode --debug    # Print live angles instead
//!   tablet-mode --chuwi    # Mirrored angle convention (some Chuwi devices)

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tablet_mode_daemon::{run_debug, DaemonConfig, PosturePoller};
use tablet_mode_device::platform::{self, PlatformSwitch};
use tablet_mode_geometry::OrientationConvention;

#[derive(Parser, Debug)]
#[command(
    name = "tablet-mode",
    version,
    about = "Detect laptop/tablet posture from two accelerometers and report SW_TABLET_MODE",
    long_about = "Reads the display and base accelerometers of a convertible once a second,\n\
                  computes the hinge angle and drives a virtual SW_TABLET_MODE switch.\n\n\
                  Postures:\n  \
                  laptop  - hinge opened less than 190°\n  \
                  tablet  - display folded back past 190°\n\n\
                  Readings are skipped while the hinge axle is within 10° of vertical.\n\
                  Log level is controlled with RUST_LOG."
)]
struct Args {
    /// Show accelerometer values and calculations
    #[arg(long)]
    debug: bool,

    /// Flip angles for some Chuwi devices
    #[arg(long)]
    chuwi: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config =
        DaemonConfig::default().with_convention(OrientationConvention::from_mirrored(args.chuwi));

    let result = if args.debug {
        run_debug_mode(&config).await
    } else {
        run_switch_mode(&config).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Drive the virtual switch until interrupted.
async fn run_switch_mode(config: &DaemonConfig) -> anyhow::Result<()> {
    let switch = PlatformSwitch::create(&config.identity).context("failed to create device")?;

    let sensors = config.accel_source();
    tracing::info!(
        display = %sensors.display_device().display(),
        base = %sensors.base_device().display(),
        "reading accelerometers"
    );

    let poller = PosturePoller::new(
        config.engine(),
        sensors,
        platform::lid_state(),
        switch,
        config.interval,
    );
    poller.run(shutdown_signal()).await;

    tracing::info!("cleaned up");
    Ok(())
}

/// Print live readings until interrupted. Never creates the switch device.
async fn run_debug_mode(config: &DaemonConfig) -> anyhow::Result<()> {
    run_debug(
        config.engine(),
        config.accel_source(),
        platform::lid_state(),
        config.interval,
        std::io::stdout(),
        shutdown_signal(),
    )
    .await
    .context("failed to write debug display")
}

/// Resolves on Ctrl-C / SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for interrupt");
        std::future::pending::<()>().await;
    }
    tracing::info!("interrupt received, shutting down");
}
