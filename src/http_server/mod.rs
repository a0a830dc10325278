//! # showdb HTTP Server Module
//!
//! Axum server exposing the shows API. Every response, including errors and
//! unknown routes, is a JSON envelope.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting
//! - `GET /mirror/{name}` - Echo a path segment
//! - `GET|POST /shows` - List / create shows
//! - `GET|PUT|DELETE /shows/{id}` - Read / patch / remove one show

pub mod config;
pub mod greeting_routes;
pub mod server;
pub mod show_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use server::{build_router, HttpServer};
