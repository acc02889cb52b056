//! Cooperative deadline.

use std::time::{Duration, Instant};

/// An absolute monotonic-clock deadline.
///
/// Computed once at search entry as `now + budget` and immutable
/// thereafter. Every loop in the search polls [`is_expired`] and exits
/// cooperatively as soon as it reports `true`; there is no interruption
/// mechanism.
///
/// [`is_expired`]: Deadline::is_expired
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_anytime::solver::Deadline;
///
/// let deadline = Deadline::new(Duration::from_secs(60));
/// assert!(!deadline.is_expired());
///
/// let expired = Deadline::new(Duration::ZERO);
/// assert!(expired.is_expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    pub fn new(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
        }
    }

    /// Creates a deadline `budget_millis` milliseconds from now.
    pub fn from_millis(budget_millis: u64) -> Self {
        Self::new(Duration::from_millis(budget_millis))
    }

    /// Returns `true` once the deadline has been reached.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_expires_immediately() {
        let deadline = Deadline::from_millis(0);
        assert!(deadline.is_expired());
    }

    #[test]
    fn test_generous_budget_not_expired() {
        let deadline = Deadline::new(Duration::from_secs(3600));
        assert!(!deadline.is_expired());
    }

    #[test]
    fn test_expiry_is_permanent() {
        let deadline = Deadline::from_millis(1);
        std::thread::sleep(Duration::from_millis(5));
        assert!(deadline.is_expired());
        assert!(deadline.is_expired());
    }
}
