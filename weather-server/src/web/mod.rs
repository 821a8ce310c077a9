//! Web layer for the weather station browser.
//!
//! Serves an HTML page for picking a state and station and reading its
//! current conditions, plus JSON endpoints for the same operations.

mod dto;
mod model;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use model::WeatherModel;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
