use super::emission_level::EmissionLevel;
use serde::{Deserialize, Serialize};

/// the winning entry of a nearest-sample scan
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct NearestSample {
    /// index of the sample in configuration iteration order
    pub index: usize,
    pub weight: f64,
    /// squared planar lat/lng distance; comparison-only, not a real distance
    pub distance_squared: f64,
}

/// result of classifying one point against the reference samples and the
/// low-emission boundary. computed fresh per query, never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ZoneResult {
    pub level: EmissionLevel,
    /// None when the reference sample set is empty
    pub nearest: Option<NearestSample>,
    pub inside_boundary: bool,
}
