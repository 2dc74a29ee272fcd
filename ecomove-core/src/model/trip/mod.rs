pub mod trip_ops;

mod invalid_input_error;
mod trip_input;
mod trip_result;

pub use invalid_input_error::InvalidInputError;
pub use trip_input::TripInput;
pub use trip_result::TripResult;
