//! Live debug display of angles and posture.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tablet_mode_device::{AccelSource, LidStateProvider};
use tablet_mode_geometry::{AngleEngine, Reading};

use crate::poller::read_posture;

/// Render one reading as display text. Every line ends with `\n`.
pub fn render_frame(reading: &Reading) -> String {
    match reading {
        Reading::Skipped { axle_angle } => format!("Hinge axle angle: {:.1}°\n", axle_angle),
        Reading::Classified(m) => format!(
            "Hinge axle angle: {:.1}°\n\
             Display angle: {:.1}°\n\
             Base angle: {:.1}°\n\
             Hinge angle: {:.1}°\n\
             Lid closed: {}\n\
             \n\
             Tablet mode: {}\n",
            m.axle_angle, m.display_angle, m.base_angle, m.fold_angle, m.lid_closed, m.posture
        ),
    }
}

/// Terminal writer that redraws each frame over the previous one.
pub struct DebugDisplay<W: Write> {
    out: W,
    previous_lines: usize,
}

impl<W: Write> DebugDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous_lines: 0,
        }
    }

    /// Replace the previous frame with `frame`.
    pub fn show(&mut self, frame: &str) -> std::io::Result<()> {
        if self.previous_lines > 0 {
            // cursor to start of the first line of the last frame, clear below
            write!(self.out, "\x1b[{}F\x1b[J", self.previous_lines)?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.previous_lines = frame.matches('\n').count();
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print live readings every `interval` until `shutdown` resolves.
///
/// Unlike [`crate::PosturePoller`] this never touches the switch device.
pub async fn run_debug<S, L, W, F>(
    engine: AngleEngine,
    sensors: S,
    lid: L,
    interval: Duration,
    out: W,
    shutdown: F,
) -> std::io::Result<()>
where
    S: AccelSource,
    L: LidStateProvider,
    W: Write,
    F: Future<Output = ()>,
{
    let mut display = DebugDisplay::new(out);

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(interval) => {
                match read_posture(&engine, &sensors, &lid) {
                    Ok(reading) => display.show(&render_frame(&reading))?,
                    Err(e) => tracing::debug!(error = %e, "sample unavailable, skipping frame"),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablet_mode_geometry::{Measurement, Posture};

    fn classified() -> Reading {
        Reading::Classified(Measurement {
            axle_angle: 90.0,
            display_angle: 12.34,
            base_angle: -45.0,
            fold_angle: 237.34,
            lid_closed: false,
            posture: Posture::Tablet,
        })
    }

    #[test]
    fn test_render_skipped_frame() {
        let frame = render_frame(&Reading::Skipped { axle_angle: 4.56 });
        assert_eq!(frame, "Hinge axle angle: 4.6°\n");
    }

    #[test]
    fn test_render_classified_frame() {
        let frame = render_frame(&classified());
        assert_eq!(
            frame,
            "Hinge axle angle: 90.0°\n\
             Display angle: 12.3°\n\
             Base angle: -45.0°\n\
             Hinge angle: 237.3°\n\
             Lid closed: false\n\
             \n\
             Tablet mode: tablet\n"
        );
    }

    #[test]
    fn test_render_unknown_posture_label() {
        let mut reading = classified();
        if let Reading::Classified(m) = &mut reading {
            m.posture = Posture::Indeterminate;
        }
        assert!(render_frame(&reading).ends_with("Tablet mode: unknown\n"));
    }

    #[test]
    fn test_display_rewrites_previous_frame() {
        let mut display = DebugDisplay::new(Vec::new());
        display.show("a\nb\n").unwrap();
        display.show("c\n").unwrap();
        display.show("d\n").unwrap();

        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "a\nb\n\x1b[2F\x1b[Jc\n\x1b[1F\x1b[Jd\n");
    }
}
