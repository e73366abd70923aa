//! Entity spawner and lifecycle manager
//!
//! Sole owner of the live-entity set. Collect and expire race against each
//! other only through removal from this set, so whichever removes an entity
//! first wins and the other becomes a no-op.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::PopEntity;
use crate::consts::*;

/// Creates pop-entities with randomized motion parameters and retires them
/// on expiry or collection.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    /// Live entities in spawn order (append-only between removals)
    live: Vec<PopEntity>,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            live: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn one emoji at `now` and add it to the live set
    pub fn spawn(&mut self, now: f64) -> &PopEntity {
        let id = self.next_id;
        self.next_id += 1;

        let symbol = EMOJI_SYMBOLS[self.rng.random_range(0..EMOJI_SYMBOLS.len())];
        let entity = PopEntity {
            id,
            symbol,
            impulse: glam::Vec2::new(
                self.rng.random_range(IMPULSE_X_MIN..IMPULSE_X_MAX),
                IMPULSE_Y,
            ),
            torque: self.rng.random_range(TORQUE_MIN..TORQUE_MAX),
            radius: BODY_RADIUS,
            mass: BODY_MASS,
            spawned_at: now,
        };

        let idx = self.live.len();
        self.live.push(entity);
        &self.live[idx]
    }

    /// Remove a live entity after a successful player tap
    ///
    /// Returns `None` if the entity already expired or was already collected;
    /// the caller treats that as a silent miss.
    pub fn collect(&mut self, id: u32) -> Option<PopEntity> {
        let idx = self.live.iter().position(|e| e.id == id)?;
        Some(self.live.remove(idx))
    }

    /// Drain every entity whose TTL has elapsed at `now`, oldest first
    ///
    /// The TTL is fixed, so expiry order equals spawn order and the expired
    /// entities form a prefix of the live set.
    pub fn expire(&mut self, now: f64) -> Vec<PopEntity> {
        let n = self
            .live
            .iter()
            .take_while(|e| e.expires_at() <= now)
            .count();
        self.live.drain(..n).collect()
    }

    /// Drop all live entities (new game)
    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Live entities in spawn order
    pub fn live(&self) -> &[PopEntity] {
        &self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_parameter_ranges() {
        let mut spawner = Spawner::new(7);
        for i in 0..200 {
            let e = spawner.spawn(i as f64 * 0.5);
            assert!(EMOJI_SYMBOLS.contains(&e.symbol));
            assert!(e.impulse.x >= IMPULSE_X_MIN && e.impulse.x < IMPULSE_X_MAX);
            assert_eq!(e.impulse.y, IMPULSE_Y);
            assert!(e.torque >= TORQUE_MIN && e.torque < TORQUE_MAX);
            assert_eq!(e.radius, BODY_RADIUS);
            assert_eq!(e.mass, BODY_MASS);
        }
        // Ids are unique and increasing in spawn order
        let ids: Vec<u32> = spawner.live().iter().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_collect_twice_second_fails() {
        let mut spawner = Spawner::new(1);
        let id = spawner.spawn(0.0).id;
        assert!(spawner.collect(id).is_some());
        assert!(spawner.collect(id).is_none());
        assert!(spawner.live().is_empty());
    }

    #[test]
    fn test_collect_unknown_id_fails() {
        let mut spawner = Spawner::new(1);
        spawner.spawn(0.0);
        assert!(spawner.collect(999).is_none());
        assert_eq!(spawner.live().len(), 1);
    }

    #[test]
    fn test_expire_boundary_and_order() {
        let mut spawner = Spawner::new(2);
        let a = spawner.spawn(0.0).id;
        let b = spawner.spawn(1.0).id;
        let c = spawner.spawn(2.0).id;

        // TTL is 3s: at t=4.0 the entities from t=0 and t=1 are gone
        // (1.0 + 3.0 <= 4.0 counts as expired), the t=2 one survives.
        let expired = spawner.expire(4.0);
        assert_eq!(expired.iter().map(|e| e.id).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(spawner.live().len(), 1);
        assert_eq!(spawner.live()[0].id, c);

        // An expired entity can no longer be collected
        assert!(spawner.collect(a).is_none());
    }

    #[test]
    fn test_collected_entity_does_not_expire() {
        let mut spawner = Spawner::new(3);
        let a = spawner.spawn(0.0).id;
        let b = spawner.spawn(0.5).id;
        assert!(spawner.collect(a).is_some());

        let expired = spawner.expire(10.0);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, b);
    }

    #[test]
    fn test_symbol_selection_is_roughly_uniform() {
        // Seeded, so deterministic: each of the 13 symbols should land
        // within 20% of the expected count over 26k draws.
        let mut spawner = Spawner::new(0xE110);
        let n = 26_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..n {
            let symbol = spawner.spawn(0.0).symbol;
            *counts.entry(symbol).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), EMOJI_SYMBOLS.len());
        let expected = n as f64 / EMOJI_SYMBOLS.len() as f64;
        for (symbol, count) in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.2,
                "symbol {symbol} count {count} deviates {deviation:.3} from uniform"
            );
        }
    }
}
