use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// routing behavior applied to a trip estimate. LowEmission assumes the
/// traveler follows a route that trims emissions by the configured
/// multiplier. threaded as an explicit argument so estimates do not depend
/// on ambient toggle state.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    #[default]
    Normal,
    LowEmission,
}

impl Display for RoutingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoutingMode::Normal => "normal",
            RoutingMode::LowEmission => "low_emission",
        };
        write!(f, "{}", s)
    }
}
