pub mod trip;
pub mod zone;

mod factor_table;
mod factor_table_error;
mod routing_mode;
mod transport_mode;

pub use factor_table::FactorTable;
pub use factor_table_error::FactorTableError;
pub use routing_mode::RoutingMode;
pub use transport_mode::TransportMode;
