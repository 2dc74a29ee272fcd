use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// relative emission intensity band derived from a reference sample weight
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmissionLevel {
    #[default]
    Low,
    Moderate,
    High,
}

impl EmissionLevel {
    /// maps a sample weight in [0, 1] to a level band. weights above 0.7 are
    /// High, weights above 0.4 up to 0.7 are Moderate, the rest are Low.
    pub fn from_weight(weight: f64) -> EmissionLevel {
        if weight > 0.7 {
            EmissionLevel::High
        } else if weight > 0.4 {
            EmissionLevel::Moderate
        } else {
            EmissionLevel::Low
        }
    }
}

impl Display for EmissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EmissionLevel::Low => "low",
            EmissionLevel::Moderate => "moderate",
            EmissionLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}
