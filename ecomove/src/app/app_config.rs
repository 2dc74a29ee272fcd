use super::app_error::AppError;
use ecomove_core::model::zone::{EmissionSample, ZoneBoundary};
use ecomove_core::model::{FactorTable, TransportMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// the full static configuration surface: factor tables, reference
/// emission samples, and the low-emission boundary ring. any omitted
/// section falls back to the built-in defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub emission_factors: HashMap<TransportMode, f64>,
    pub cost_factors: HashMap<TransportMode, f64>,
    pub low_emission_multiplier: f64,
    pub emission_samples: Vec<EmissionSample>,
    /// ordered (lat, lng) vertices of the boundary ring, implicitly closed
    pub boundary_polygon: Vec<[f64; 2]>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let factors = FactorTable::default();
        AppConfig {
            emission_factors: factors.emission_factors,
            cost_factors: factors.cost_factors,
            low_emission_multiplier: factors.low_emission_multiplier,
            emission_samples: vec![],
            boundary_polygon: vec![],
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<AppConfig, AppError> {
        let contents = std::fs::read_to_string(Path::new(path))
            .map_err(|e| AppError::FileReadError(path.to_string(), e))?;
        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| AppError::ConfigParseError(path.to_string(), e))?;
        config.factor_table().validate()?;
        for sample in config.emission_samples.iter() {
            if !(0.0..=1.0).contains(&sample.weight) {
                log::warn!(
                    "emission sample at ({}, {}) has weight {} outside [0, 1]",
                    sample.lat,
                    sample.lng,
                    sample.weight
                );
            }
        }
        Ok(config)
    }

    /// assembles the validated, read-only factor table handed to the estimator
    pub fn factor_table(&self) -> FactorTable {
        FactorTable {
            emission_factors: self.emission_factors.clone(),
            cost_factors: self.cost_factors.clone(),
            low_emission_multiplier: self.low_emission_multiplier,
        }
    }

    pub fn boundary(&self) -> ZoneBoundary {
        ZoneBoundary::from_latlng_ring(&self.boundary_polygon)
    }
}
