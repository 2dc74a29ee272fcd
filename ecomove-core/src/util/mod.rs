pub mod geo_utils;
pub mod math_utils;
