//! Platform abstraction layer
//!
//! Statically-typed collaborator traits injected into the session at
//! construction. The AR host and the presentation layer implement these;
//! the sim core only calls them, never the other way around.

use crate::sim::PopEntity;

/// Places and removes the real-world anchor the spawn point hangs off.
///
/// Anchor presence is cosmetic to the core, so implementations are free to
/// swallow tracking failures; nothing here returns an error.
pub trait AnchorProvider {
    /// Place a new world anchor in front of the camera
    fn place_anchor(&mut self);
    /// Remove the current world anchor, if any
    fn remove_anchor(&mut self);
}

/// Fire-and-forget presentation notifications (HUD text, sound cues,
/// scene-node add/remove). No return value is consumed.
pub trait PresentationSink {
    /// HUD status line changed
    fn status_text(&mut self, text: &str);
    /// An emoji was spawned and should enter the scene
    fn entity_spawned(&mut self, entity: &PopEntity);
    /// An emoji was collected by the player
    fn entity_collected(&mut self, entity: &PopEntity);
    /// An emoji expired uncollected
    fn entity_expired(&mut self, entity: &PopEntity);
}
