/// the only hard failure the trip estimator raises. every other irregular
/// input degrades: unknown modes substitute the car factor.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("trip distance must be a finite number, found {0}")]
    NonFiniteDistance(f64),
    #[error("trip distance must be greater than zero, found {0}")]
    NonPositiveDistance(f64),
}
