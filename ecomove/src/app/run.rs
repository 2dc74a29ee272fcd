use super::app_config::AppConfig;
use super::app_error::AppError;
use super::cli_args::CliArgs;
use super::query::{self, Query};
use ecomove_core::model::trip::{trip_ops, TripInput};
use ecomove_core::model::zone::{zone_ops, ZoneBoundary};
use ecomove_core::model::{FactorTable, TransportMode};
use ecomove_core::util::geo_utils;

/// loads configuration and queries, runs each query through the core, and
/// prints one JSON result per line on stdout. a failing query is logged and
/// skipped; the remaining queries still run.
pub fn run(args: &CliArgs) -> Result<(), AppError> {
    let config = AppConfig::from_file(&args.config_file)?;
    let factors = config.factor_table();
    let boundary = config.boundary();
    let queries = query::load_queries(&args.query_file)?;
    log::info!(
        "loaded {} queries, {} reference samples",
        queries.len(),
        config.emission_samples.len()
    );

    for (index, q) in queries.iter().enumerate() {
        match run_query(q, &config, &factors, &boundary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("query {} failed: {}", index, e),
        }
    }
    Ok(())
}

/// dispatches a single query to the estimator or the classifier and
/// serializes the structured result
pub fn run_query(
    query: &Query,
    config: &AppConfig,
    factors: &FactorTable,
    boundary: &ZoneBoundary,
) -> Result<String, AppError> {
    match query {
        Query::Trip {
            distance_km,
            mode,
            routing,
        } => {
            let mode = resolve_mode(mode)?;
            let input = TripInput::new(*distance_km, mode).with_routing(*routing);
            let result = trip_ops::estimate(&input, factors)?;
            log::debug!("trip by {} over {} km estimated", mode, distance_km);
            Ok(serde_json::to_string(&result)?)
        }
        Query::Zone { lat, lng } => {
            let point = geo_utils::latlng_coord(*lat, *lng);
            let result = zone_ops::classify(&point, &config.emission_samples, boundary);
            Ok(serde_json::to_string(&result)?)
        }
    }
}

/// presence check happens here, not in the core: a blank mode is "no valid
/// input yet" and is rejected before the estimator ever runs. any non-blank
/// unknown identifier still degrades to the car baseline.
fn resolve_mode(raw: &str) -> Result<TransportMode, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::MissingTransportMode);
    }
    Ok(TransportMode::resolve(raw))
}

#[cfg(test)]
mod test {
    use super::*;
    use ecomove_core::model::zone::EmissionSample;
    use ecomove_core::model::RoutingMode;

    fn demo_config() -> AppConfig {
        AppConfig {
            emission_samples: vec![
                EmissionSample::new(51.5074, -0.1278, 0.9),
                EmissionSample::new(51.53, -0.18, 0.2),
            ],
            boundary_polygon: vec![
                [51.54, -0.2],
                [51.54, -0.02],
                [51.47, -0.02],
                [51.47, -0.2],
            ],
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_trip_query_round_trip() {
        let config = demo_config();
        let query = Query::Trip {
            distance_km: 10.0,
            mode: String::from("train"),
            routing: RoutingMode::Normal,
        };
        let json = run_query(&query, &config, &config.factor_table(), &config.boundary())
            .expect("trip query should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("result should be valid json");
        assert_eq!(value["trip_emissions"], 0.41);
        assert_eq!(value["emissions_saved"], 1.51);
        assert_eq!(value["money_saved"], 0.0);
        assert_eq!(value["savings_percent"], 0);
    }

    #[test]
    fn test_zone_query_round_trip() {
        let config = demo_config();
        let query = Query::Zone {
            lat: 51.5074,
            lng: -0.1278,
        };
        let json = run_query(&query, &config, &config.factor_table(), &config.boundary())
            .expect("zone query should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("result should be valid json");
        assert_eq!(value["level"], "high");
        assert_eq!(value["inside_boundary"], true);
        assert_eq!(value["nearest"]["index"], 0);
    }

    #[test]
    fn test_blank_mode_rejected() {
        let config = demo_config();
        let query = Query::Trip {
            distance_km: 10.0,
            mode: String::from("  "),
            routing: RoutingMode::Normal,
        };
        let error = run_query(&query, &config, &config.factor_table(), &config.boundary())
            .expect_err("blank mode should be rejected");
        assert!(matches!(error, AppError::MissingTransportMode));
    }

    #[test]
    fn test_unknown_mode_degrades_to_car() {
        let config = demo_config();
        let query = Query::Trip {
            distance_km: 10.0,
            mode: String::from("hovercraft"),
            routing: RoutingMode::Normal,
        };
        let json = run_query(&query, &config, &config.factor_table(), &config.boundary())
            .expect("unknown mode should degrade, not fail");
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("result should be valid json");
        assert_eq!(value["trip_emissions"], 1.92);
        assert_eq!(value["savings_percent"], 0);
    }
}
