//! Lingo Gate - HTTP front door for translation and language detection
//!
//! Translation is forwarded to an external provider; detection runs the
//! bundled whatlang detector and maps the result through a static table.

pub mod api;
pub mod config;
pub mod languages;
pub mod services;

pub use config::Config;
