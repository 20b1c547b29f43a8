use serde::{Deserialize, Serialize};
use std::fmt;

// Stored and serialized as its integer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum Priority {
    #[default]
    Low = 0,
    Medium = 1,
    High = 2,
    Urgent = 3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPriority(pub i32);

impl fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority level {}", self.0)
    }
}

impl TryFrom<i32> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::High),
            3 => Ok(Priority::Urgent),
            other => Err(InvalidPriority(other)),
        }
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> i32 {
        priority as i32
    }
}

/// Badge text and color shown next to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityDetails {
    pub text: &'static str,
    pub color: &'static str,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn details(self) -> PriorityDetails {
        match self {
            Priority::Urgent => PriorityDetails { text: "Urgent", color: "#EF4444" },
            Priority::High => PriorityDetails { text: "High", color: "#F97316" },
            Priority::Medium => PriorityDetails { text: "Medium", color: "#EAB308" },
            Priority::Low => PriorityDetails { text: "Low", color: "#22C55E" },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

// Select option for the task form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityOption {
    pub label: &'static str,
    pub value: Priority,
    pub text: &'static str,
    pub color: &'static str,
}

pub fn priority_options() -> Vec<PriorityOption> {
    Priority::ALL
        .iter()
        .map(|&priority| {
            let details = priority.details();
            PriorityOption {
                label: priority.label(),
                value: priority,
                text: details.text,
                color: details.color,
            }
        })
        .collect()
}
