//! EmojiPop - an AR emoji-popping mini-game core
//!
//! Core modules:
//! - `sim`: Deterministic game logic (session state machine, spawner, entities)
//! - `platform`: Collaborator traits for the AR/presentation boundary
//!
//! The crate owns the game loop only: phase transitions, spawn timing, entity
//! time-to-live, scoring and lives. AR world tracking, rendering, physics
//! integration, audio and hit-testing live behind the `platform` traits.

pub mod platform;
pub mod sim;

pub use platform::{AnchorProvider, PresentationSink};
pub use sim::{GamePhase, PopEntity, Session, Spawner};

/// Game configuration constants
pub mod consts {
    /// Lives granted at the start of a game
    pub const START_LIVES: u32 = 10;
    /// Grace period before the first emoji spawns (seconds)
    pub const FIRST_SPAWN_DELAY: f64 = 3.0;
    /// Interval between spawn requests once the onslaught starts (seconds)
    pub const SPAWN_INTERVAL: f64 = 0.5;
    /// How long an uncollected emoji survives (seconds)
    pub const ENTITY_TTL: f64 = 3.0;

    /// The fixed emoji catalog; spawns draw uniformly from this set
    pub const EMOJI_SYMBOLS: [char; 13] = [
        '😁', '😂', '😛', '😝', '😋', '😜', '🤪', '😎', '🤓', '🤖', '🎃', '💀', '🤡',
    ];

    /// Horizontal launch impulse range, half-open [min, max)
    pub const IMPULSE_X_MIN: f32 = -5.0;
    pub const IMPULSE_X_MAX: f32 = 5.0;
    /// Vertical launch impulse, fixed for every spawn
    pub const IMPULSE_Y: f32 = 10.0;
    /// Spin torque range, half-open [min, max)
    pub const TORQUE_MIN: f32 = -0.2;
    pub const TORQUE_MAX: f32 = 0.2;

    /// Circular physics-body spec handed to the physics substrate
    pub const BODY_RADIUS: f32 = 15.0;
    pub const BODY_MASS: f32 = 0.01;
}
