pub mod pokemon;

pub use pokemon::{CapturePokemonRequest, Pokemon};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
