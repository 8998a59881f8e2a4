//! Pure functions for mapping pokedex errors to HTTP status codes.
//!
//! Kept separate from the error type itself so the mapping stays a pure
//! function with no side effects and no HTTP framework dependency.

use super::PokedexError;

/// Maps a [`PokedexError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `Duplicate` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Upstream` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use pokedex_core::{error_to_status_code, PokedexError};
///
/// let error = PokedexError::NotFound { id: 151 };
/// assert_eq!(error_to_status_code(&error), 404);
/// ```
pub fn error_to_status_code(error: &PokedexError) -> u16 {
    match error {
        PokedexError::Validation { .. } => 400,
        PokedexError::Duplicate { .. } => 400,
        PokedexError::NotFound { .. } => 404,
        PokedexError::Upstream(_) => 502,
    }
}
