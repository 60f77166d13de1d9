//! Cipher results annotated with timing metadata.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output of a cipher call with its elapsed time and completion timestamp.
///
/// Serializes as `{"result", "executionTimeMs", "completionTime"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherResult {
    pub result: String,
    pub execution_time_ms: u64,
    pub completion_time: DateTime<Utc>,
}

/// Runs `op`, timing it with a monotonic clock.
pub(crate) fn timed<F>(op: F) -> Result<CipherResult>
where
    F: FnOnce() -> Result<String>,
{
    let start = Instant::now();
    let result = op()?;
    let elapsed = start.elapsed();
    Ok(CipherResult {
        result,
        execution_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        completion_time: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayfairError;

    #[test]
    fn test_timed_wraps_result() {
        let before = Utc::now();
        let out = timed(|| Ok("CFSEPM".to_string())).unwrap();
        assert_eq!(out.result, "CFSEPM");
        assert!(out.completion_time >= before);
    }

    #[test]
    fn test_timed_propagates_error() {
        let out = timed(|| Err(PlayfairError::EmptyKey));
        assert_eq!(out, Err(PlayfairError::EmptyKey));
    }

    #[test]
    fn test_timed_measures_elapsed() {
        let out = timed(|| {
            std::thread::sleep(std::time::Duration::from_millis(5));
            Ok(String::new())
        })
        .unwrap();
        assert!(out.execution_time_ms >= 5);
    }
}
