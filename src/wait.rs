//! Bounded condition polling

use crate::error::{E2eError, Result};
use std::time::{Duration, Instant};

/// Interval between two probes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Probe until it yields a value or the timeout expires.
///
/// The probe runs at least once. Errors from the probe abort the wait
/// immediately; `Ok(None)` means "not yet". On expiry the error carries
/// `what`.
pub fn poll_until<T>(
    timeout: Duration,
    what: impl FnOnce() -> String,
    mut probe: impl FnMut() -> Result<Option<T>>,
) -> Result<T> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(value) = probe()? {
            return Ok(value);
        }
        let now = Instant::now();
        if now >= deadline {
            return Err(E2eError::Timeout(format!("{} (after {} ms)", what(), timeout.as_millis())));
        }
        std::thread::sleep(DEFAULT_POLL_INTERVAL.min(deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_first_ready_value() {
        let mut calls = 0;
        let value = poll_until(Duration::from_secs(1), || "counter".into(), || {
            calls += 1;
            Ok(if calls >= 3 { Some(calls) } else { None })
        })
        .unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_zero_timeout_probes_once() {
        let mut calls = 0;
        let result: Result<()> = poll_until(Duration::ZERO, || "never".into(), || {
            calls += 1;
            Ok(None)
        });
        assert_eq!(calls, 1);
        match result {
            Err(E2eError::Timeout(msg)) => assert!(msg.starts_with("never")),
            other => panic!("Expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn test_probe_error_aborts() {
        let result: Result<()> = poll_until(Duration::from_secs(5), || "x".into(), || {
            Err(E2eError::ElementNotFound("gone".into()))
        });
        assert!(matches!(result, Err(E2eError::ElementNotFound(_))));
    }
}
