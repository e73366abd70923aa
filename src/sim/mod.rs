//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only through `Session::on_tick`
//! - Seeded RNG only
//! - Stable iteration order (live entities in spawn order)
//! - No AR, rendering or platform dependencies

pub mod session;
pub mod spawner;
pub mod state;

pub use session::Session;
pub use spawner::Spawner;
pub use state::{GamePhase, PopEntity};
