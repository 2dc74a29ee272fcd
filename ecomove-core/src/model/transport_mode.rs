use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the canonical transport mode set. "bike"/"walk"/"diesel" appear in some
/// callers as synonyms and are accepted as aliases of the canonical names.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    #[serde(alias = "diesel")]
    DieselCar,
    Bus,
    Train,
    #[serde(alias = "bike")]
    Cycling,
    #[serde(alias = "walk")]
    Walking,
}

impl TransportMode {
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Car,
        TransportMode::DieselCar,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Cycling,
        TransportMode::Walking,
    ];

    /// total function from a raw mode identifier to a transport mode.
    /// unrecognized identifiers resolve to Car so that every trip degrades
    /// to a car-equivalent baseline instead of erroring.
    pub fn resolve(identifier: &str) -> TransportMode {
        match identifier.trim().to_lowercase().as_str() {
            "car" => TransportMode::Car,
            "diesel" | "diesel_car" => TransportMode::DieselCar,
            "bus" => TransportMode::Bus,
            "train" => TransportMode::Train,
            "cycling" | "bike" => TransportMode::Cycling,
            "walking" | "walk" => TransportMode::Walking,
            _ => TransportMode::Car,
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransportMode::Car => "car",
            TransportMode::DieselCar => "diesel_car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Cycling => "cycling",
            TransportMode::Walking => "walking",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use super::TransportMode;

    #[test]
    fn test_resolve_canonical_names() {
        assert_eq!(TransportMode::resolve("car"), TransportMode::Car);
        assert_eq!(TransportMode::resolve("bus"), TransportMode::Bus);
        assert_eq!(TransportMode::resolve("train"), TransportMode::Train);
        assert_eq!(TransportMode::resolve("cycling"), TransportMode::Cycling);
        assert_eq!(TransportMode::resolve("walking"), TransportMode::Walking);
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(TransportMode::resolve("bike"), TransportMode::Cycling);
        assert_eq!(TransportMode::resolve("walk"), TransportMode::Walking);
        assert_eq!(TransportMode::resolve("diesel"), TransportMode::DieselCar);
        assert_eq!(TransportMode::resolve("Bike "), TransportMode::Cycling);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_car() {
        assert_eq!(TransportMode::resolve("rocket"), TransportMode::Car);
        assert_eq!(TransportMode::resolve(""), TransportMode::Car);
    }

    #[test]
    fn test_serde_alias() {
        let mode: TransportMode =
            serde_json::from_str("\"bike\"").expect("alias should deserialize");
        assert_eq!(mode, TransportMode::Cycling);
        let json = serde_json::to_string(&mode).expect("mode should serialize");
        assert_eq!(json, "\"cycling\"", "should serialize to the canonical name");
    }
}
