use crate::util::geo_utils;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// a static reference measurement: a location with a relative emission
/// intensity weight in [0, 1]. loaded once from configuration, read-only
/// for the lifetime of the process.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmissionSample {
    pub lat: f64,
    pub lng: f64,
    pub weight: f64,
}

impl EmissionSample {
    pub fn new(lat: f64, lng: f64, weight: f64) -> EmissionSample {
        EmissionSample { lat, lng, weight }
    }

    pub fn coord(&self) -> Coord {
        geo_utils::latlng_coord(self.lat, self.lng)
    }
}
