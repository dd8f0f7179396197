//! Visit status — position of a visit in its lifecycle.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a [`Visit`](super::Visit).
///
/// `Scheduled` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl VisitStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Scheduled)
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => f.write_str("SCHEDULED"),
            Self::Completed => f.write_str("COMPLETED"),
            Self::Cancelled => f.write_str("CANCELLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_scheduled() {
        assert_eq!(VisitStatus::default(), VisitStatus::Scheduled);
    }

    #[test]
    fn should_report_terminal_states() {
        assert!(!VisitStatus::Scheduled.is_terminal());
        assert!(VisitStatus::Completed.is_terminal());
        assert!(VisitStatus::Cancelled.is_terminal());
    }

    #[test]
    fn should_serialize_in_upper_case() {
        let json = serde_json::to_string(&VisitStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
        assert_eq!(VisitStatus::Completed.to_string(), "COMPLETED");
    }
}
