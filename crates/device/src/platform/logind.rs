//! Lid state from systemd-logind over the system bus.

use crate::error::{DeviceError, DeviceResult};
use crate::provider::LidStateProvider;
use std::sync::Mutex;
use zbus::blocking::Connection;
use zbus::zvariant::OwnedValue;

const LOGIND_DESTINATION: &str = "org.freedesktop.login1";
const LOGIND_PATH: &str = "/org/freedesktop/login1";
const LOGIND_MANAGER_INTERFACE: &str = "org.freedesktop.login1.Manager";
const LID_CLOSED_PROPERTY: &str = "LidClosed";
const PROPERTIES_INTERFACE: &str = "org.freedesktop.DBus.Properties";

/// Queries `org.freedesktop.login1.Manager.LidClosed`.
///
/// The bus connection is opened on first use and kept; a failed query drops it
/// so the next call reconnects. Each call does a single `Properties.Get`, so
/// no property cache or signal match is set up.
#[derive(Default)]
pub struct LogindLidState {
    connection: Mutex<Option<Connection>>,
}

impl LogindLidState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn bus_error(e: impl std::fmt::Display) -> DeviceError {
    DeviceError::Bus(e.to_string())
}

fn query_lid_closed(slot: &mut Option<Connection>) -> DeviceResult<bool> {
    if slot.is_none() {
        *slot = Some(Connection::system().map_err(bus_error)?);
    }
    let Some(conn) = slot.as_ref() else {
        return Err(DeviceError::Bus("no system bus connection".to_string()));
    };

    let reply = conn
        .call_method(
            Some(LOGIND_DESTINATION),
            LOGIND_PATH,
            Some(PROPERTIES_INTERFACE),
            "Get",
            &(LOGIND_MANAGER_INTERFACE, LID_CLOSED_PROPERTY),
        )
        .map_err(bus_error)?;
    let value: OwnedValue = reply.body().deserialize().map_err(bus_error)?;
    bool::try_from(value).map_err(bus_error)
}

/// Run `query` against the cached handle in `slot`, failing open.
///
/// Any error reads as "not closed" and clears the slot so the next query starts
/// from a fresh handle.
fn query_or_reset<C, Q>(slot: &mut Option<C>, query: Q) -> bool
where
    Q: FnOnce(&mut Option<C>) -> DeviceResult<bool>,
{
    match query(slot) {
        Ok(closed) => closed,
        Err(e) => {
            tracing::debug!(error = %e, "lid state unavailable, assuming open");
            *slot = None;
            false
        }
    }
}

impl LidStateProvider for LogindLidState {
    fn is_lid_closed(&self) -> bool {
        let Ok(mut slot) = self.connection.lock() else {
            return false;
        };
        query_or_reset(&mut *slot, query_lid_closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_query_reads_open_and_drops_handle() {
        let mut slot = Some(7u32);

        let closed = query_or_reset(&mut slot, |_| Err(DeviceError::Bus("gone".to_string())));

        assert!(!closed);
        assert!(slot.is_none());
    }

    #[test]
    fn test_query_after_failure_reconnects() {
        let mut slot: Option<u32> = None;
        query_or_reset(&mut slot, |_| Err(DeviceError::Bus("gone".to_string())));

        let closed = query_or_reset(&mut slot, |slot| {
            assert!(slot.is_none());
            *slot = Some(1);
            Ok(true)
        });

        assert!(closed);
        assert_eq!(slot, Some(1));
    }

    #[test]
    fn test_successful_query_keeps_handle() {
        let mut slot = Some(3u32);

        assert!(!query_or_reset(&mut slot, |_| Ok(false)));
        assert_eq!(slot, Some(3));
    }
}
