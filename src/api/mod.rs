//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod pokemon;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_router_with_state, create_router_with_ui};
pub use state::{AppState, PokemonServiceTrait};
