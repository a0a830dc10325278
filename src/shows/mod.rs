//! # Shows
//!
//! Validation and CRUD policy for show records.

mod errors;
mod handler;

pub use errors::{ShowError, ShowResult};
pub use handler::{ShowHandler, COLLECTION, EPISODES_SEEN_FIELD, NAME_FIELD};
