pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod zdk;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
