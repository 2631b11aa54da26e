//! Tablet-mode daemon.
//!
//! Ties the geometry and device crates together:
//!
//! ```text
//! AccelSource ──► AngleEngine ──► classify ──► (changed?) ──► PostureSink
//!                      ▲
//! LidStateProvider ────┘
//! ```
//!
//! - [`PosturePoller`] - interval loop with edge detection, owns the switch
//! - [`run_debug`] - same sampling, prints live values instead
//! - [`DaemonConfig`] - defaults plus CLI overrides

mod config;
mod debug;
mod poller;

pub use config::{DaemonConfig, DEFAULT_POLL_INTERVAL};
pub use debug::{render_frame, run_debug, DebugDisplay};
pub use poller::{read_posture, PosturePoller, TickOutcome};
