//! HTTP API: translation and language detection endpoints

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{create_router, serve};
pub use state::AppState;
