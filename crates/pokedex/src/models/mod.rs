mod pokemon;

pub use pokemon::{CreatePokemon, NewPokemon, UpdatePokemon};
