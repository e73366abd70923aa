//! Core game data types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed but not yet handed to the player (AR setup in progress)
    Init,
    /// Anchor surface ready, waiting for the start tap
    WaitingToStart,
    /// Active gameplay
    Playing,
    /// Lives exhausted; a tap restarts
    GameOver,
}

/// One spawned, time-limited, tappable emoji
///
/// Owned exclusively by the spawner's live set. The impulse/torque/body
/// fields describe the one-shot physics the external substrate should apply;
/// the core itself only tracks identity and expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopEntity {
    /// Unique per spawn
    pub id: u32,
    /// One code point from the fixed emoji catalog
    pub symbol: char,
    /// Launch impulse: x uniform in [-5, 5), y fixed at 10
    pub impulse: Vec2,
    /// Spin torque, uniform in [-0.2, 0.2)
    pub torque: f32,
    /// Circular body radius for the physics substrate
    pub radius: f32,
    /// Body mass for the physics substrate
    pub mass: f32,
    /// Session time at spawn (seconds)
    pub spawned_at: f64,
}

impl PopEntity {
    /// Session time at which this entity self-destructs if uncollected
    pub fn expires_at(&self) -> f64 {
        self.spawned_at + ENTITY_TTL
    }
}
