//! Askama templates for the web frontend.

use askama::Template;

use super::model::WeatherModel;

/// Station browser page: state selector, station list, current conditions.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub model: WeatherModel,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
