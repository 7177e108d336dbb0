//! Decorative heart markers
//!
//! `HeartSpawner` drives the short-lived "pop" hearts from an explicit clock:
//! the host calls [`HeartSpawner::advance`] with the current time and renders
//! whatever is active. `floating_hearts` lays out the CSS-animated hearts of the
//! celebration screen.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::random_in;

/// Floor on the gap between spawn attempts, keeps the schedule moving forward
const MIN_SPAWN_GAP_MS: f64 = 1.0;

/// A pop heart at a normalized position (percent of the container)
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub id: u32,
    pub x_pct: f32,
    pub y_pct: f32,
    pub expires_at_ms: f64,
}

/// What changed during one `advance` call
#[derive(Debug, Default, PartialEq)]
pub struct HeartEvents {
    pub spawned: Vec<u32>,
    pub expired: Vec<u32>,
}

impl HeartEvents {
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.expired.is_empty()
    }
}

/// Capped set of self-expiring heart markers with a randomized spawn schedule
#[derive(Debug, Clone)]
pub struct HeartSpawner {
    hearts: Vec<Heart>,
    cap: usize,
    lifetime_ms: f64,
    delay_band_ms: (f64, f64),
    next_spawn_at_ms: f64,
    next_id: u32,
    rng: Pcg32,
}

impl HeartSpawner {
    /// Start a spawner whose first attempt is one random delay after `now_ms`
    pub fn new(seed: u64, now_ms: f64) -> Self {
        Self::with_limits(
            seed,
            now_ms,
            MAX_VISIBLE_HEARTS,
            HEART_LIFETIME_MS,
            (HEART_MIN_SPAWN_DELAY_MS, HEART_MAX_SPAWN_DELAY_MS),
        )
    }

    pub fn with_limits(
        seed: u64,
        now_ms: f64,
        cap: usize,
        lifetime_ms: f64,
        delay_band_ms: (f64, f64),
    ) -> Self {
        let mut spawner = Self {
            hearts: Vec::with_capacity(cap),
            cap,
            lifetime_ms,
            delay_band_ms,
            next_spawn_at_ms: now_ms,
            next_id: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        spawner.next_spawn_at_ms = now_ms + spawner.next_delay();
        spawner
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn next_spawn_at_ms(&self) -> f64 {
        self.next_spawn_at_ms
    }

    fn next_delay(&mut self) -> f64 {
        let (min, max) = self.delay_band_ms;
        (random_in(&mut self.rng, min as f32, max as f32) as f64).max(MIN_SPAWN_GAP_MS)
    }

    /// Expire old hearts and run every spawn attempt due by `now_ms`.
    ///
    /// Each attempt schedules the next one whether or not it created a heart,
    /// so sitting at the cap never stalls the schedule.
    pub fn advance(&mut self, now_ms: f64) -> HeartEvents {
        let mut events = HeartEvents::default();

        while self.next_spawn_at_ms <= now_ms {
            let at = self.next_spawn_at_ms;
            self.expire(at, &mut events.expired);
            if let Some(id) = self.try_spawn(at) {
                events.spawned.push(id);
            }
            self.next_spawn_at_ms = at + self.next_delay();
        }
        self.expire(now_ms, &mut events.expired);

        // A heart both spawned and expired inside one call never needs rendering
        let transient: Vec<u32> = events
            .spawned
            .iter()
            .copied()
            .filter(|id| events.expired.contains(id))
            .collect();
        if !transient.is_empty() {
            events.spawned.retain(|id| !transient.contains(id));
            events.expired.retain(|id| !transient.contains(id));
        }
        events
    }

    fn try_spawn(&mut self, now_ms: f64) -> Option<u32> {
        if self.hearts.len() >= self.cap {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.hearts.push(Heart {
            id,
            x_pct: random_in(&mut self.rng, 0.0, 100.0),
            y_pct: random_in(&mut self.rng, 0.0, 100.0),
            expires_at_ms: now_ms + self.lifetime_ms,
        });
        Some(id)
    }

    fn expire(&mut self, now_ms: f64, expired: &mut Vec<u32>) {
        self.hearts.retain(|h| {
            let alive = h.expires_at_ms > now_ms;
            if !alive {
                expired.push(h.id);
            }
            alive
        });
    }
}

/// A CSS-animated heart rising across the celebration screen
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub id: u32,
    pub left_pct: f32,
    pub delay_s: f32,
    pub duration_s: f32,
}

/// Lay out `count` floating hearts with random position, delay (0-5s) and duration (8-12s)
pub fn floating_hearts(seed: u64, count: usize) -> Vec<FloatingHeart> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count as u32)
        .map(|id| FloatingHeart {
            id,
            left_pct: random_in(&mut rng, 0.0, 100.0),
            delay_s: random_in(&mut rng, 0.0, 5.0),
            duration_s: random_in(&mut rng, 8.0, 12.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_spawn_waits_for_delay() {
        let mut spawner = HeartSpawner::new(1, 0.0);
        let first = spawner.next_spawn_at_ms();
        assert!((HEART_MIN_SPAWN_DELAY_MS..HEART_MAX_SPAWN_DELAY_MS).contains(&first));
        assert!(spawner.advance(first - 1.0).is_empty());
        let events = spawner.advance(first);
        assert_eq!(events.spawned, vec![0]);
        assert_eq!(spawner.hearts().len(), 1);
    }

    #[test]
    fn test_zero_delay_band_still_advances() {
        let mut spawner = HeartSpawner::with_limits(1, 0.0, 8, 2500.0, (0.0, 0.0));
        assert_eq!(spawner.next_spawn_at_ms(), MIN_SPAWN_GAP_MS);
        let events = spawner.advance(10.0);
        assert_eq!(events.spawned.len(), 8);
        assert_eq!(spawner.hearts().len(), 8);
        assert!(spawner.next_spawn_at_ms() > 10.0);

        let mut negative = HeartSpawner::with_limits(1, 0.0, 8, 2500.0, (-50.0, -100.0));
        negative.advance(5.0);
        assert!(negative.next_spawn_at_ms() > 5.0);
    }

    #[test]
    fn test_heart_expires_after_lifetime() {
        let mut spawner = HeartSpawner::with_limits(2, 0.0, 8, 2500.0, (10_000.0, 10_001.0));
        let first = spawner.next_spawn_at_ms();
        spawner.advance(first);
        assert_eq!(spawner.hearts().len(), 1);
        assert!(spawner.advance(first + 2499.0).is_empty());
        let events = spawner.advance(first + 2500.0);
        assert_eq!(events.expired, vec![0]);
        assert!(spawner.hearts().is_empty());
    }

    #[test]
    fn test_cap_does_not_stall_schedule() {
        // Long-lived hearts and fast spawns saturate the cap quickly
        let mut spawner = HeartSpawner::with_limits(3, 0.0, 8, 60_000.0, (100.0, 200.0));
        spawner.advance(5_000.0);
        assert_eq!(spawner.hearts().len(), 8);

        let before = spawner.next_spawn_at_ms();
        spawner.advance(before);
        assert!(spawner.next_spawn_at_ms() > before, "schedule must keep moving at the cap");
        assert_eq!(spawner.hearts().len(), 8);
    }

    #[test]
    fn test_positions_are_normalized() {
        let mut spawner = HeartSpawner::with_limits(4, 0.0, 8, 100.0, (50.0, 60.0));
        for t in 0..200 {
            spawner.advance(t as f64 * 25.0);
            for h in spawner.hearts() {
                assert!((0.0..100.0).contains(&h.x_pct));
                assert!((0.0..100.0).contains(&h.y_pct));
            }
        }
    }

    #[test]
    fn test_floating_hearts_layout() {
        let hearts = floating_hearts(9, FLOATING_HEART_COUNT);
        assert_eq!(hearts.len(), 20);
        for h in &hearts {
            assert!((0.0..100.0).contains(&h.left_pct));
            assert!((0.0..5.0).contains(&h.delay_s));
            assert!((8.0..12.0).contains(&h.duration_s));
        }
        assert_eq!(hearts, floating_hearts(9, FLOATING_HEART_COUNT));
    }

    proptest! {
        #[test]
        fn prop_active_count_never_exceeds_cap(
            seed in any::<u64>(),
            steps in proptest::collection::vec(1.0f64..5_000.0, 1..100),
        ) {
            let mut spawner = HeartSpawner::with_limits(seed, 0.0, 8, 2500.0, (1.0, 50.0));
            let mut now = 0.0;
            for dt in steps {
                now += dt;
                spawner.advance(now);
                prop_assert!(spawner.hearts().len() <= 8);
            }
        }
    }
}
