pub mod app_config;
pub mod cli_args;
pub mod query;
pub mod run;

mod app_error;

pub use app_config::AppConfig;
pub use app_error::AppError;
pub use query::Query;
