use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::task::TaskPriority;

/// Monetary penalty per priority for overdue, incomplete tasks.
/// Deserializes from a plain object keyed by priority name, e.g.
/// `{"low": 10.0, "high": 50.0}`. Unconfigured priorities cost nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PenaltySettings {
    amounts: HashMap<TaskPriority, f64>,
}

impl PenaltySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, priority: TaskPriority, amount: f64) -> &mut Self {
        self.amounts.insert(priority, amount);
        self
    }

    pub fn amount_for(&self, priority: TaskPriority) -> f64 {
        self.amounts.get(&priority).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_priority_costs_nothing() {
        let mut settings = PenaltySettings::new();
        settings.set(TaskPriority::High, 50.0);

        assert_eq!(settings.amount_for(TaskPriority::High), 50.0);
        assert_eq!(settings.amount_for(TaskPriority::Low), 0.0);
    }

    #[test]
    fn deserializes_from_priority_keyed_object() {
        let settings: PenaltySettings =
            serde_json::from_str(r#"{"low": 5.0, "medium": 10.0, "high": 50.0, "urgent": 100.0}"#)
                .unwrap();

        assert_eq!(settings.amount_for(TaskPriority::Urgent), 100.0);
        assert_eq!(settings.amount_for(TaskPriority::Medium), 10.0);
    }
}
