use serde::{Deserialize, Serialize};

/// emissions saved at or below this threshold render as "equivalent to car"
/// rather than as a vanishing savings bar
pub const CAR_EQUIVALENCE_THRESHOLD_KG: f64 = 0.001;

/// trips above this emission mass are flagged so callers can suggest
/// lower-impact alternatives
pub const HIGH_EMISSION_THRESHOLD_KG: f64 = 1.5;

/// fully derived from a TripInput and a FactorTable, never stored. all
/// magnitudes are rounded half-up at the second decimal; the two advisory
/// flags are evaluated against the unrounded magnitudes, so a real saving
/// small enough to round to 0.00 still clears the equivalence threshold.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TripResult {
    /// kg CO2-equivalent emitted by the trip
    pub trip_emissions: f64,
    /// kg CO2-equivalent the same trip would emit by car
    pub car_emissions: f64,
    pub emissions_saved: f64,
    /// monetary cost of the trip
    pub trip_cost: f64,
    /// monetary cost of the same trip by car
    pub car_cost: f64,
    pub money_saved: f64,
    /// whole-percent cost savings against the car baseline, clamped to [0, 100]
    pub savings_percent: u32,
    /// true when the trip's emissions are indistinguishable from driving,
    /// so callers render "similar to driving by car" instead of a
    /// zero-width savings artifact
    pub equivalent_to_car: bool,
    /// true when the trip lands in the advisory high-emission band
    pub high_emission: bool,
}
