//! Weather station browser server.
//!
//! A web application that lists NOAA weather stations by state and shows
//! the current conditions reported by one of them. Station lists are
//! cached in a local SQLite database; observations always come fresh from
//! the feed.

pub mod config;
pub mod data;
pub mod domain;
pub mod logging;
pub mod noaa;
pub mod store;
pub mod web;
