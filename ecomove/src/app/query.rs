use super::app_error::AppError;
use ecomove_core::model::RoutingMode;
use serde::{Deserialize, Serialize};

/// one unit of work for the computation layer, tagged by type:
///
/// ```json
/// { "type": "trip", "distance_km": 10.0, "mode": "train" }
/// { "type": "zone", "lat": 51.5074, "lng": -0.1278 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type")]
pub enum Query {
    Trip {
        distance_km: f64,
        /// raw mode identifier; resolved (with car fallback) at dispatch.
        /// rejected when empty so "no input yet" is distinguishable from
        /// "input rejected"
        mode: String,
        #[serde(default)]
        routing: RoutingMode,
    },
    Zone {
        lat: f64,
        lng: f64,
    },
}

/// a query file holds a single query object or an array of them
#[derive(Deserialize)]
#[serde(untagged)]
enum QueryFile {
    Single(Query),
    Many(Vec<Query>),
}

pub fn load_queries(path: &str) -> Result<Vec<Query>, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::FileReadError(path.to_string(), e))?;
    let parsed: QueryFile = serde_json::from_str(&contents)
        .map_err(|e| AppError::QueryParseError(path.to_string(), e))?;
    match parsed {
        QueryFile::Single(query) => Ok(vec![query]),
        QueryFile::Many(queries) => Ok(queries),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trip_query_parses() {
        let query: Query = serde_json::from_str(
            r#"{ "type": "trip", "distance_km": 10.0, "mode": "train", "routing": "low_emission" }"#,
        )
        .expect("trip query should parse");
        match query {
            Query::Trip {
                distance_km,
                mode,
                routing,
            } => {
                assert_eq!(distance_km, 10.0);
                assert_eq!(mode, "train");
                assert_eq!(routing, RoutingMode::LowEmission);
            }
            other => panic!("expected trip query, found {:?}", other),
        }
    }

    #[test]
    fn test_routing_defaults_to_normal() {
        let query: Query =
            serde_json::from_str(r#"{ "type": "trip", "distance_km": 2.5, "mode": "bike" }"#)
                .expect("trip query should parse");
        match query {
            Query::Trip { routing, .. } => assert_eq!(routing, RoutingMode::Normal),
            other => panic!("expected trip query, found {:?}", other),
        }
    }

    #[test]
    fn test_zone_query_parses() {
        let query: Query =
            serde_json::from_str(r#"{ "type": "zone", "lat": 51.5074, "lng": -0.1278 }"#)
                .expect("zone query should parse");
        assert!(matches!(query, Query::Zone { .. }));
    }

    #[test]
    fn test_unknown_query_type_rejected() {
        let result =
            serde_json::from_str::<Query>(r#"{ "type": "teleport", "distance_km": 1.0 }"#);
        assert!(result.is_err());
    }
}
