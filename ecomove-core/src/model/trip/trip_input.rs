use crate::model::routing_mode::RoutingMode;
use crate::model::transport_mode::TransportMode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TripInput {
    pub distance_km: f64,
    pub mode: TransportMode,
    #[serde(default)]
    pub routing: RoutingMode,
}

impl TripInput {
    pub fn new(distance_km: f64, mode: TransportMode) -> TripInput {
        TripInput {
            distance_km,
            mode,
            routing: RoutingMode::default(),
        }
    }

    pub fn with_routing(mut self, routing: RoutingMode) -> TripInput {
        self.routing = routing;
        self
    }
}
