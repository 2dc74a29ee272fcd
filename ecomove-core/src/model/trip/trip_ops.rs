use super::invalid_input_error::InvalidInputError;
use super::trip_input::TripInput;
use super::trip_result::{TripResult, CAR_EQUIVALENCE_THRESHOLD_KG, HIGH_EMISSION_THRESHOLD_KG};
use crate::model::factor_table::FactorTable;
use crate::model::routing_mode::RoutingMode;
use crate::model::transport_mode::TransportMode;
use crate::util::math_utils;

/// estimates trip emissions, cost, and savings against the car baseline.
///
/// the low-emission multiplier applies to the trip's own emissions before
/// savings are derived; the car baseline is never modified. money saved is
/// cost-only and clamps at zero, so a mode that emits less but costs more
/// than driving (train, typically) reports zero monetary savings.
///
/// # Arguments
///
/// * `input` - distance, transport mode, and routing mode for one trip
/// * `factors` - read-only emission/cost factor configuration
///
/// # Returns
///
/// A complete TripResult, or InvalidInputError when the distance is not a
/// finite positive number.
pub fn estimate(input: &TripInput, factors: &FactorTable) -> Result<TripResult, InvalidInputError> {
    if !input.distance_km.is_finite() {
        return Err(InvalidInputError::NonFiniteDistance(input.distance_km));
    }
    if input.distance_km <= 0.0 {
        return Err(InvalidInputError::NonPositiveDistance(input.distance_km));
    }

    let emission_factor = factors.emission_factor(&input.mode);
    let cost_factor = factors.cost_factor(&input.mode);
    let car_emission_factor = factors.emission_factor(&TransportMode::Car);
    let car_cost_factor = factors.cost_factor(&TransportMode::Car);

    let mut trip_emissions = input.distance_km * emission_factor;
    if input.routing == RoutingMode::LowEmission {
        trip_emissions *= factors.low_emission_multiplier;
    }
    let car_emissions = input.distance_km * car_emission_factor;
    let emissions_saved = (car_emissions - trip_emissions).max(0.0);

    let trip_cost = input.distance_km * cost_factor;
    let car_cost = input.distance_km * car_cost_factor;
    let money_saved = (car_cost - trip_cost).max(0.0);

    let savings_percent = math_utils::percent_clamped(money_saved, car_cost);

    // advisory flags compare the unrounded magnitudes: a saving of 0.004 kg
    // displays as 0.00 but is still a real saving, not car-equivalence
    let equivalent_to_car = emissions_saved <= CAR_EQUIVALENCE_THRESHOLD_KG;
    let high_emission = trip_emissions > HIGH_EMISSION_THRESHOLD_KG;

    Ok(TripResult {
        trip_emissions: math_utils::round_half_up_2(trip_emissions),
        car_emissions: math_utils::round_half_up_2(car_emissions),
        emissions_saved: math_utils::round_half_up_2(emissions_saved),
        trip_cost: math_utils::round_half_up_2(trip_cost),
        car_cost: math_utils::round_half_up_2(car_cost),
        money_saved: math_utils::round_half_up_2(money_saved),
        savings_percent,
        equivalent_to_car,
        high_emission,
    })
}
