use super::factor_table_error::FactorTableError;
use super::transport_mode::TransportMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// immutable mapping from transport mode to an emission factor
/// (kg CO2-equivalent per km) and a cost factor (currency per km), built
/// once from configuration. factor values are illustrative, not survey data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorTable {
    pub emission_factors: HashMap<TransportMode, f64>,
    pub cost_factors: HashMap<TransportMode, f64>,
    /// applied to trip emissions when routing in low-emission mode
    pub low_emission_multiplier: f64,
}

impl Default for FactorTable {
    fn default() -> Self {
        FactorTable {
            emission_factors: HashMap::from([
                (TransportMode::Car, 0.192),
                (TransportMode::DieselCar, 0.171),
                (TransportMode::Bus, 0.104),
                (TransportMode::Train, 0.041),
                (TransportMode::Cycling, 0.0),
                (TransportMode::Walking, 0.0),
            ]),
            cost_factors: HashMap::from([
                (TransportMode::Car, 0.10),
                (TransportMode::DieselCar, 0.11),
                (TransportMode::Bus, 0.20),
                (TransportMode::Train, 0.25),
                (TransportMode::Cycling, 0.0),
                (TransportMode::Walking, 0.0),
            ]),
            low_emission_multiplier: 0.7,
        }
    }
}

impl FactorTable {
    /// emission factor for a mode, falling back to the car entry for modes
    /// absent from the table. a table with no car entry yields 0.0, though
    /// validate() rejects such tables at load time.
    pub fn emission_factor(&self, mode: &TransportMode) -> f64 {
        self.emission_factors
            .get(mode)
            .or_else(|| self.emission_factors.get(&TransportMode::Car))
            .copied()
            .unwrap_or(0.0)
    }

    /// cost factor for a mode, with the same car fallback as emission_factor.
    pub fn cost_factor(&self, mode: &TransportMode) -> f64 {
        self.cost_factors
            .get(mode)
            .or_else(|| self.cost_factors.get(&TransportMode::Car))
            .copied()
            .unwrap_or(0.0)
    }

    /// confirms all configured factors are usable: non-negative factors, a
    /// finite non-negative multiplier, and a car entry in both tables so the
    /// baseline and the unknown-mode fallback are always defined.
    pub fn validate(&self) -> Result<(), FactorTableError> {
        for (mode, factor) in self.emission_factors.iter() {
            if *factor < 0.0 || !factor.is_finite() {
                return Err(FactorTableError::NegativeEmissionFactor(*mode, *factor));
            }
        }
        for (mode, factor) in self.cost_factors.iter() {
            if *factor < 0.0 || !factor.is_finite() {
                return Err(FactorTableError::NegativeCostFactor(*mode, *factor));
            }
        }
        if self.low_emission_multiplier < 0.0 || !self.low_emission_multiplier.is_finite() {
            return Err(FactorTableError::InvalidLowEmissionMultiplier(
                self.low_emission_multiplier,
            ));
        }
        if !self.emission_factors.contains_key(&TransportMode::Car) {
            return Err(FactorTableError::MissingCarBaseline(String::from(
                "emission_factors",
            )));
        }
        if !self.cost_factors.contains_key(&TransportMode::Car) {
            return Err(FactorTableError::MissingCarBaseline(String::from(
                "cost_factors",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = FactorTable::default();
        table.validate().expect("default table should validate");
    }

    #[test]
    fn test_missing_mode_falls_back_to_car() {
        let table = FactorTable {
            emission_factors: HashMap::from([(TransportMode::Car, 0.18)]),
            cost_factors: HashMap::from([(TransportMode::Car, 0.10)]),
            low_emission_multiplier: 0.7,
        };
        assert_eq!(table.emission_factor(&TransportMode::Train), 0.18);
        assert_eq!(table.cost_factor(&TransportMode::Bus), 0.10);
    }

    #[test]
    fn test_negative_factor_rejected() {
        let mut table = FactorTable::default();
        table.emission_factors.insert(TransportMode::Bus, -0.1);
        let error = table.validate().expect_err("negative factor should fail");
        assert_eq!(
            error,
            FactorTableError::NegativeEmissionFactor(TransportMode::Bus, -0.1)
        );
    }

    #[test]
    fn test_missing_car_baseline_rejected() {
        let mut table = FactorTable::default();
        table.emission_factors.remove(&TransportMode::Car);
        let error = table
            .validate()
            .expect_err("table without car entry should fail");
        assert!(matches!(error, FactorTableError::MissingCarBaseline(_)));
    }

    #[test]
    fn test_toml_keys_accept_aliases() {
        let table: FactorTable = toml::from_str(
            r#"
            low_emission_multiplier = 0.5

            [emission_factors]
            car = 0.18
            bike = 0.0
            "#,
        )
        .expect("table should parse from toml");
        assert_eq!(table.low_emission_multiplier, 0.5);
        assert_eq!(table.emission_factor(&TransportMode::Cycling), 0.0);
        assert_eq!(table.emission_factor(&TransportMode::Car), 0.18);
    }
}
