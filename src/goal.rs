//! Savings goals: completion percentage and time-remaining estimates.

use std::fmt::{self, Display};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// A savings goal funded by explicit "add amount" actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// The opaque storage identifier of the goal.
    pub id: String,
    /// The goal's display title.
    pub title: String,
    /// The amount being saved towards.
    pub target_amount: Decimal,
    /// The amount saved so far. Adjusted only by explicit actions, never
    /// inferred from transactions; over-funding past the target is valid.
    pub current_amount: Decimal,
    /// The day the goal should be reached by, if any.
    pub deadline: Option<Date>,
    /// The icon the presentation layer shows for this goal.
    pub icon: String,
}

/// A time-remaining estimate for a goal deadline.
///
/// Months are estimated with a fixed 30-day approximation, not the
/// calendar-month arithmetic the trend window uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRemaining {
    /// The goal has no deadline.
    NoDeadline,
    /// The deadline is today or already behind us.
    DeadlinePassed,
    /// Whole 30-day months left until the deadline, rounded up.
    Months(i64),
}

impl Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDeadline => write!(f, "No deadline set"),
            Self::DeadlinePassed => write!(f, "Deadline passed"),
            Self::Months(1) => write!(f, "1 month remaining"),
            Self::Months(months) => write!(f, "{months} months remaining"),
        }
    }
}

/// Percentage of the target reached, uncapped: over-funded goals report
/// more than 100. A zero target reports 0 rather than dividing by zero.
/// Callers clamp to 100 for bar rendering only, never for the numeric
/// readout.
pub fn progress_percentage(current: Decimal, target: Decimal) -> Decimal {
    if target > Decimal::ZERO {
        current / target * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Estimate the time remaining until `deadline`, measured from `today`.
pub fn time_remaining(deadline: Option<Date>, today: Date) -> TimeRemaining {
    let Some(deadline) = deadline else {
        return TimeRemaining::NoDeadline;
    };

    let days = (deadline - today).whole_days();

    if days <= 0 {
        return TimeRemaining::DeadlinePassed;
    }

    // Whole 30-day months, rounded up.
    TimeRemaining::Months((days + 29) / 30)
}

/// The derived progress figures for one goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Percentage of the target reached, uncapped.
    pub percentage: Decimal,
    /// Time-remaining estimate for the goal's deadline.
    pub time_remaining: TimeRemaining,
}

/// Derive the progress figures for `goal` as of `today`.
pub fn goal_progress(goal: &Goal, today: Date) -> GoalProgress {
    GoalProgress {
        percentage: progress_percentage(goal.current_amount, goal.target_amount),
        time_remaining: time_remaining(goal.deadline, today),
    }
}
