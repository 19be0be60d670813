use serde::{Deserialize, Serialize};

use crate::date::DateKey;

/// The one fact remembered between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Date of the last successful wallpaper change
    #[serde(rename = "lastDate")]
    pub last_date: DateKey,
}

impl State {
    pub fn new(last_date: DateKey) -> Self {
        Self { last_date }
    }

    /// True when the wallpaper was already changed on `today`
    pub fn is_current(&self, today: &DateKey) -> bool {
        &self.last_date == today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serialization() {
        let state = State::new("2024-03-01".parse().unwrap());
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"lastDate":"2024-03-01"}"#);
    }

    #[test]
    fn test_state_ignores_unknown_fields() {
        let parsed: State =
            serde_json::from_str(r#"{"lastDate":"2024-03-01","extra":true}"#).unwrap();
        assert_eq!(parsed.last_date.as_str(), "2024-03-01");
    }

    #[test]
    fn test_is_current() {
        let state = State::new("2024-03-01".parse().unwrap());
        assert!(state.is_current(&"2024-03-01".parse().unwrap()));
        assert!(!state.is_current(&"2024-03-02".parse().unwrap()));
    }
}
