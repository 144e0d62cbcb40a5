use anyhow::Result;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Fixed-interval polling budget. Worst-case wait is `max_attempts * interval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Calls `probe` until `accept` holds for its value or the budget runs out.
///
/// A probe error counts as a miss, the same as an unaccepted value: right
/// after a write the identity backend routinely answers "not found". Returns
/// `None` on exhaustion so the caller can pick its own fatal error.
pub async fn poll_until<T, F, P>(
    policy: &RetryPolicy,
    label: &str,
    mut probe: F,
    accept: P,
) -> Option<T>
where
    F: FnMut(u32) -> Result<T>,
    P: Fn(&T) -> bool,
{
    for attempt in 1..=policy.max_attempts {
        match probe(attempt) {
            Ok(value) if accept(&value) => {
                tracing::debug!(label, attempt, "poll succeeded");
                return Some(value);
            }
            Ok(_) => {
                tracing::debug!(label, attempt, "poll returned no usable value");
            }
            Err(e) => {
                tracing::debug!(label, attempt, error = %e, "poll attempt failed");
            }
        }

        if attempt < policy.max_attempts {
            println!(
                "    {} not ready yet (attempt {}/{}), retrying in {}s...",
                label,
                attempt,
                policy.max_attempts,
                policy.interval.as_secs()
            );
            tokio::time::sleep(policy.interval).await;
        }
    }
    None
}
