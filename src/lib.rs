//! showdb - an in-memory shows API
//!
//! Every response is wrapped in the same envelope
//! (`code`, `success`, `message`, `result`); see [`envelope`].

pub mod cli;
pub mod datastore;
pub mod envelope;
pub mod http_server;
pub mod observability;
pub mod shows;
