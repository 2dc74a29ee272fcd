use super::transport_mode::TransportMode;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FactorTableError {
    #[error("emission factor for {0} must be non-negative, found {1}")]
    NegativeEmissionFactor(TransportMode, f64),
    #[error("cost factor for {0} must be non-negative, found {1}")]
    NegativeCostFactor(TransportMode, f64),
    #[error("low emission multiplier must be a non-negative finite number, found {0}")]
    InvalidLowEmissionMultiplier(f64),
    #[error("factor table is missing the {0} entry for the car baseline")]
    MissingCarBaseline(String),
}
