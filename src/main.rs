//! EmojiPop headless demo
//!
//! Runs one scripted session at 60 Hz with a seeded auto-player standing in
//! for the human: it occasionally taps the oldest live emoji, everything
//! else expires. Prints a JSON run summary when the game ends.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use emoji_pop::platform::{AnchorProvider, PresentationSink};
use emoji_pop::sim::{GamePhase, PopEntity, Session};

/// Frame rate of the demo loop
const FRAME_DT: f64 = 1.0 / 60.0;
/// Per-frame tap probability of the auto-player (1 in N)
const TAP_ODDS: u32 = 200;
/// Hard cap on demo length (frames) in case the auto-player gets too good
const MAX_FRAMES: u32 = 60 * 120;

/// Logs anchor requests; a real build would drive an AR session here
struct LogAnchor;

impl AnchorProvider for LogAnchor {
    fn place_anchor(&mut self) {
        log::debug!("anchor placed 0.5m in front of camera");
    }
    fn remove_anchor(&mut self) {
        log::debug!("anchor removed");
    }
}

/// Logs presentation cues and tallies them for the run summary
#[derive(Default)]
struct LogPresenter {
    spawned: u32,
    collected: u32,
    expired: u32,
}

impl PresentationSink for LogPresenter {
    fn status_text(&mut self, text: &str) {
        log::trace!("HUD: {text}");
    }
    fn entity_spawned(&mut self, entity: &PopEntity) {
        self.spawned += 1;
        log::debug!(
            "spawned {} #{} impulse=({:.2}, {:.0}) torque={:.3}",
            entity.symbol,
            entity.id,
            entity.impulse.x,
            entity.impulse.y,
            entity.torque
        );
    }
    fn entity_collected(&mut self, entity: &PopEntity) {
        self.collected += 1;
        log::info!("collected {} #{}", entity.symbol, entity.id);
    }
    fn entity_expired(&mut self, entity: &PopEntity) {
        self.expired += 1;
        log::info!("missed {} #{}", entity.symbol, entity.id);
    }
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    score: u32,
    spawned: u32,
    collected: u32,
    expired: u32,
    duration_secs: f64,
}

/// Run one scripted session to completion and tally the results
fn run_demo(seed: u64) -> RunSummary {
    let mut session = Session::new(seed, LogAnchor, LogPresenter::default());

    // AR setup ready, then the start tap
    session.start_game();
    session.on_input(None);

    let mut reflexes = Pcg32::seed_from_u64(seed ^ 0x5EED);
    let mut now = 0.0;
    let mut frames = 0;
    while session.phase() == GamePhase::Playing && frames < MAX_FRAMES {
        session.on_tick(now);

        if session.phase() == GamePhase::Playing
            && reflexes.random_range(0..TAP_ODDS) == 0
        {
            let tap = session.live_entities().first().map(|e| e.id);
            session.on_touch_batch(tap.as_slice());
        }

        now += FRAME_DT;
        frames += 1;
    }

    RunSummary {
        seed,
        score: session.score(),
        spawned: session.presenter().spawned,
        collected: session.presenter().collected,
        expired: session.presenter().expired,
        duration_secs: now,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    log::info!("EmojiPop demo starting with seed {seed}");

    let summary = run_demo(seed);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("summary serialization failed: {e}"),
    }
}
