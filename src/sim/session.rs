//! Session state machine
//!
//! Owns phase, score, lives and spawn scheduling. Reacts to per-frame ticks
//! and discrete input events; entity ownership is delegated to the spawner,
//! platform side effects to the collaborators injected at construction.

use super::spawner::Spawner;
use super::state::{GamePhase, PopEntity};
use crate::consts::*;
use crate::platform::{AnchorProvider, PresentationSink};

/// One game session, generic over the AR anchor and presentation
/// collaborators.
///
/// Single-threaded cooperative model: every operation runs to completion
/// before the next event is processed. Pausing is modeled by not calling
/// [`Session::on_tick`]; time the platform never reports is not charged
/// against entity TTLs or spawn deadlines.
pub struct Session<A, P> {
    phase: GamePhase,
    score: u32,
    lives: u32,
    /// Next scheduled spawn time; `None` until the first tick after
    /// entering Playing
    next_spawn_deadline: Option<f64>,
    spawner: Spawner,
    anchor: A,
    presenter: P,
}

impl<A: AnchorProvider, P: PresentationSink> Session<A, P> {
    /// Create a session in the `Init` phase
    ///
    /// The AR host calls [`Session::start_game`] once its setup is ready.
    /// The seed drives all spawn randomness; equal seeds and equal event
    /// sequences produce identical sessions.
    pub fn new(seed: u64, anchor: A, presenter: P) -> Self {
        Self {
            phase: GamePhase::Init,
            score: 0,
            lives: START_LIVES,
            next_spawn_deadline: None,
            spawner: Spawner::new(seed),
            anchor,
            presenter,
        }
    }

    /// Enter `WaitingToStart`; valid from any phase, idempotent
    pub fn start_game(&mut self) {
        self.phase = GamePhase::WaitingToStart;
        self.presenter.status_text("- TAP TO START -");
        self.anchor.remove_anchor();
        log::info!("session ready, waiting for start tap");
    }

    /// Enter `Playing` with fresh counters and an empty live set
    pub fn play_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = START_LIVES;
        self.next_spawn_deadline = None;
        self.spawner.clear();
        self.anchor.place_anchor();
        log::info!("game started with {} lives", self.lives);
    }

    /// Enter `GameOver`; triggered by lives reaching 0 or externally
    pub fn stop_game(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!("game over with score {}", self.score);
        self.presenter
            .status_text(&format!("GAME OVER! SCORE: {}", self.score));
    }

    /// Per-frame tick; no-op unless Playing
    ///
    /// Within one tick: expiry processing (and any resulting `stop_game`)
    /// completes first, then at most one spawn, then the HUD status update.
    pub fn on_tick(&mut self, now: f64) {
        if self.phase != GamePhase::Playing {
            return;
        }

        for entity in self.spawner.expire(now) {
            self.presenter.entity_expired(&entity);
            if self.phase == GamePhase::Playing {
                self.on_entity_expired();
            }
        }
        if self.phase != GamePhase::Playing {
            return;
        }

        match self.next_spawn_deadline {
            // First tick after entering Playing: give the player a grace
            // period before the onslaught starts.
            None => self.next_spawn_deadline = Some(now + FIRST_SPAWN_DELAY),
            Some(deadline) if now >= deadline => {
                let entity = self.spawner.spawn(now);
                self.presenter.entity_spawned(entity);
                self.next_spawn_deadline = Some(now + SPAWN_INTERVAL);
            }
            Some(_) => {}
        }

        self.presenter
            .status_text(&format!("SCORE: {} | LIVES: {}", self.score, self.lives));
    }

    /// Discrete touch event, already resolved to a live entity id or `None`
    pub fn on_input(&mut self, touched: Option<u32>) {
        match self.phase {
            GamePhase::Init => {}
            GamePhase::WaitingToStart => self.play_game(),
            GamePhase::Playing => {
                if let Some(id) = touched {
                    // A stale id (entity already expired or collected) is a
                    // silent miss.
                    if let Some(entity) = self.spawner.collect(id) {
                        self.score += 1;
                        self.presenter.entity_collected(&entity);
                    }
                }
            }
            GamePhase::GameOver => self.start_game(),
        }
    }

    /// Touch batch from the input source; only the first resolved touch of
    /// a batch counts
    pub fn on_touch_batch(&mut self, touched: &[u32]) {
        self.on_input(touched.first().copied());
    }

    /// AR session interruption recovery: restart to `WaitingToStart`
    pub fn on_interruption_ended(&mut self) {
        log::warn!("AR session interruption ended, restarting");
        self.start_game();
    }

    fn on_entity_expired(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.stop_game();
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Live entities in spawn order
    pub fn live_entities(&self) -> &[PopEntity] {
        self.spawner.live()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn anchor(&self) -> &A {
        &self.anchor
    }
}
