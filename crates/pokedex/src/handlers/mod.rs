mod error;
pub mod pokemons;

pub use error::ApiError;
