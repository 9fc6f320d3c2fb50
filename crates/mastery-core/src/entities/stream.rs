use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A deliberate practice focus area tracked by milestone counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningStream {
    pub id: i64,
    pub name: String,
    pub focus: String,
    pub milestones_total: u32,
    pub milestones_completed: u32,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl LearningStream {
    /// Whether every milestone has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.milestones_completed >= self.milestones_total
    }

    /// Milestones left before the stream is complete.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.milestones_total.saturating_sub(self.milestones_completed)
    }

    /// Shift completed milestones by `delta`, clamped to `[0, milestones_total]`.
    pub fn apply_progress(&mut self, delta: i64) {
        self.milestones_completed = clamp_completed(
            i64::from(self.milestones_completed).saturating_add(delta),
            self.milestones_total,
        );
    }
}

/// Clamp a completed count into `[0, total]`.
#[must_use]
pub fn clamp_completed(completed: i64, total: u32) -> u32 {
    let clamped = completed.clamp(0, i64::from(total));
    u32::try_from(clamped).unwrap_or(total)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn stream(total: u32, completed: u32) -> LearningStream {
        LearningStream {
            id: 1,
            name: "Systems Design".into(),
            focus: String::new(),
            milestones_total: total,
            milestones_completed: completed,
            color: "#6366F1".into(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(4, 1, 1, 2)]
    #[case(4, 1, -1, 0)]
    #[case(4, 0, -5, 0)]
    #[case(4, 3, 10, 4)]
    #[case(4, 4, 1, 4)]
    #[case(4, 2, i64::MAX, 4)]
    #[case(4, 2, i64::MIN, 0)]
    fn progress_stays_in_bounds(
        #[case] total: u32,
        #[case] completed: u32,
        #[case] delta: i64,
        #[case] expected: u32,
    ) {
        let mut s = stream(total, completed);
        s.apply_progress(delta);
        assert_eq!(s.milestones_completed, expected);
        assert!(s.milestones_completed <= s.milestones_total);
    }

    #[test]
    fn remaining_and_complete() {
        let s = stream(5, 2);
        assert_eq!(s.remaining(), 3);
        assert!(!s.is_complete());
        assert!(stream(3, 3).is_complete());
    }
}
