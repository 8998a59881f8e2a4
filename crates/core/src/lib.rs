//! Core domain types for the pokedex service.
//!
//! This crate holds the pieces shared between the server and any future
//! consumers: the [`Pokemon`](pokemon::Pokemon) record, the error taxonomy,
//! and the pure error-to-HTTP-status mapping.

pub mod error;
pub mod http_mapping;
pub mod pokemon;

pub use error::{PokedexError, Result};
pub use http_mapping::error_to_status_code;
pub use pokemon::Pokemon;
