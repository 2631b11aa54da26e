//! Posture poller - samples the sensors on an interval and drives the switch.

use std::future::Future;
use std::time::Duration;

use tablet_mode_device::{AccelSource, DeviceResult, LidStateProvider, PostureSink};
use tablet_mode_geometry::{AngleEngine, Posture, Reading};

/// Read both halves and run the angle pipeline once.
///
/// The lid is only queried when the hinge axle is usable.
pub fn read_posture<S, L>(engine: &AngleEngine, sensors: &S, lid: &L) -> DeviceResult<Reading>
where
    S: AccelSource + ?Sized,
    L: LidStateProvider + ?Sized,
{
    let display = sensors.read_display()?;
    let base = sensors.read_base()?;
    Ok(engine.read(&display, &base, || lid.is_lid_closed()))
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A sample could not be read; nothing changed.
    SampleUnavailable,

    /// Hinge axle near vertical; nothing changed.
    Skipped,

    /// Posture classified, same as before.
    Unchanged(Posture),

    /// Posture changed and the switch was updated.
    Notified(Posture),

    /// Posture changed but writing the switch failed; retried next tick.
    NotifyFailed(Posture),
}

/// Polls the accelerometers and emits a switch event on posture change.
///
/// Owns the sink; it is released when the poller is dropped, which
/// [`PosturePoller::run`] does on shutdown.
pub struct PosturePoller<S, L, K> {
    engine: AngleEngine,
    sensors: S,
    lid: L,
    sink: K,
    interval: Duration,
    last_posture: Posture,
}

impl<S, L, K> PosturePoller<S, L, K>
where
    S: AccelSource,
    L: LidStateProvider,
    K: PostureSink,
{
    pub fn new(engine: AngleEngine, sensors: S, lid: L, sink: K, interval: Duration) -> Self {
        Self {
            engine,
            sensors,
            lid,
            sink,
            interval,
            last_posture: Posture::Indeterminate,
        }
    }

    /// Last posture successfully written to the sink.
    pub fn last_posture(&self) -> Posture {
        self.last_posture
    }

    /// Sample, classify and notify once.
    pub fn tick(&mut self) -> TickOutcome {
        let reading = match read_posture(&self.engine, &self.sensors, &self.lid) {
            Ok(reading) => reading,
            Err(e) if e.is_transient() => {
                tracing::debug!(error = %e, "sample unavailable, skipping tick");
                return TickOutcome::SampleUnavailable;
            }
            Err(e) => {
                tracing::warn!(error = %e, "sensor read failed, skipping tick");
                return TickOutcome::SampleUnavailable;
            }
        };

        let measurement = match reading {
            Reading::Skipped { axle_angle } => {
                tracing::trace!(axle_angle, "hinge axle near vertical, skipping tick");
                return TickOutcome::Skipped;
            }
            Reading::Classified(m) => m,
        };

        let posture = measurement.posture;
        if posture == self.last_posture {
            return TickOutcome::Unchanged(posture);
        }

        let on = posture.is_tablet();
        match self.sink.set_tablet_mode(on) {
            Ok(()) => {
                tracing::info!(
                    posture = %posture,
                    fold_angle = measurement.fold_angle,
                    axle_angle = measurement.axle_angle,
                    lid_closed = measurement.lid_closed,
                    "SW_TABLET_MODE {}",
                    i32::from(on)
                );
                self.last_posture = posture;
                TickOutcome::Notified(posture)
            }
            Err(e) => {
                tracing::warn!(
                    posture = %posture,
                    error = %e,
                    "failed to write tablet mode switch"
                );
                TickOutcome::NotifyFailed(posture)
            }
        }
    }

    /// Tick every interval until `shutdown` resolves.
    ///
    /// Consumes the poller so the sink is released exactly once on return.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tracing::info!(
            interval = ?self.interval,
            convention = %self.engine.convention(),
            "posture poller started"
        );

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {
                    self.tick();
                }
            }
        }

        tracing::info!(last_posture = %self.last_posture, "posture poller stopped");
    }
}
