pub mod zone_ops;

mod emission_level;
mod emission_sample;
mod zone_boundary;
mod zone_result;

pub use emission_level::EmissionLevel;
pub use emission_sample::EmissionSample;
pub use zone_boundary::ZoneBoundary;
pub use zone_result::{NearestSample, ZoneResult};
