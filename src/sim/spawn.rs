//! Book spawning
//!
//! A book appears only when two gates are open at once: enough time has
//! passed since the last spawn (a freshly rolled interval each attempt) and
//! the newest book has scrolled at least `min_book_spacing` away from the
//! spawn edge.

use rand::Rng;

use super::state::{Book, GameEvent, GameState};
use crate::tuning::Tuning;

/// Uniform value in `[-spread, spread]`
fn jitter_f64<R: Rng>(rng: &mut R, spread: f64) -> f64 {
    if spread > 0.0 {
        rng.random_range(-spread..=spread)
    } else {
        0.0
    }
}

fn jitter_f32<R: Rng>(rng: &mut R, spread: f32) -> f32 {
    if spread > 0.0 {
        rng.random_range(-spread..=spread)
    } else {
        0.0
    }
}

/// Roll the wait before the next book (ms)
pub fn roll_interval<R: Rng>(rng: &mut R, tuning: &Tuning) -> f64 {
    tuning.base_book_interval_ms + jitter_f64(rng, tuning.book_interval_variation_ms)
}

/// Roll a book height
pub fn roll_height<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    tuning.book_height + jitter_f32(rng, tuning.book_height_variation)
}

/// Is the newest book far enough from the spawn edge?
pub fn spacing_clear(books: &[Book], tuning: &Tuning) -> bool {
    match books.last() {
        None => true,
        Some(last) => tuning.spawn_x() - last.pos.x >= tuning.min_book_spacing,
    }
}

/// One spawn attempt. Appends a book and returns a reference to it if both
/// gates are open.
pub fn try_spawn_book(state: &mut GameState) -> Option<&Book> {
    let interval = roll_interval(&mut state.rng, &state.tuning);
    let elapsed = state.clock_ms - state.last_spawn_ms;
    if elapsed < interval || !spacing_clear(&state.books, &state.tuning) {
        return None;
    }

    let height = roll_height(&mut state.rng, &state.tuning);
    let book = Book::new(state.tuning.spawn_x(), height, &state.tuning);
    log::debug!(
        "Book spawned at t={:.0}ms (height {:.1}, waited {:.0}ms)",
        state.clock_ms,
        height,
        elapsed
    );
    state.events.push(GameEvent::BookSpawned {
        x: book.pos.x,
        height,
    });
    state.books.push(book);
    state.last_spawn_ms = state.clock_ms;
    state.books.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rolls_stay_in_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let interval = roll_interval(&mut rng, &tuning);
            assert!((1500.0..=2500.0).contains(&interval));
            let height = roll_height(&mut rng, &tuning);
            assert!((20.0..=60.0).contains(&height));
        }
    }

    #[test]
    fn test_zero_variation_is_exact() {
        let tuning = Tuning {
            book_height_variation: 0.0,
            book_interval_variation_ms: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(roll_interval(&mut rng, &tuning), 2000.0);
        assert_eq!(roll_height(&mut rng, &tuning), 40.0);
    }

    #[test]
    fn test_spacing_gate() {
        let tuning = Tuning::default();
        assert!(spacing_clear(&[], &tuning));
        assert!(!spacing_clear(&[Book::new(601.0, 40.0, &tuning)], &tuning));
        assert!(spacing_clear(&[Book::new(600.0, 40.0, &tuning)], &tuning));
        // Only the newest book matters
        let books = [
            Book::new(100.0, 40.0, &tuning),
            Book::new(700.0, 40.0, &tuning),
        ];
        assert!(!spacing_clear(&books, &tuning));
    }

    #[test]
    fn test_time_gate_blocks_early_spawn() {
        let mut state = GameState::new(11);
        state.clock_ms = 1499.0;
        assert!(try_spawn_book(&mut state).is_none());
        assert!(state.books.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_spawns_when_both_gates_open() {
        let mut state = GameState::new(11);
        state.clock_ms = 2500.0;
        let book = try_spawn_book(&mut state).cloned().unwrap();
        assert_eq!(book.pos.x, 900.0);
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.last_spawn_ms, 2500.0);
        assert!(matches!(
            state.events[..],
            [GameEvent::BookSpawned { x, .. }] if x == 900.0
        ));
    }

    #[test]
    fn test_spacing_blocks_even_when_time_is_up() {
        let mut state = GameState::new(11);
        let tuning = state.tuning.clone();
        state.books.push(Book::new(800.0, 40.0, &tuning));
        state.clock_ms = 10_000.0;
        assert!(try_spawn_book(&mut state).is_none());
        assert_eq!(state.books.len(), 1);
        // Spawn time not recorded on a blocked attempt
        assert_eq!(state.last_spawn_ms, 0.0);
    }

    #[test]
    fn test_blocked_attempt_still_rolls_interval() {
        let mut state = GameState::new(11);
        state.clock_ms = 100.0;
        let mut expected = state.rng.clone();
        roll_interval(&mut expected, &state.tuning);

        assert!(try_spawn_book(&mut state).is_none());
        assert_eq!(state.rng, expected);

        // Spacing-blocked attempts roll too, but never a height
        let tuning = state.tuning.clone();
        state.books.push(Book::new(800.0, 40.0, &tuning));
        state.clock_ms = 10_000.0;
        roll_interval(&mut expected, &state.tuning);
        assert!(try_spawn_book(&mut state).is_none());
        assert_eq!(state.rng, expected);
    }

    #[test]
    fn test_same_elapsed_can_go_either_way() {
        // 2000ms sits mid-range of the 1500..=2500 interval, so fresh rolls
        // must both admit and reject a spawn
        let mut state = GameState::new(5);
        let (mut spawned, mut blocked) = (0, 0);
        for _ in 0..200 {
            state.books.clear();
            state.last_spawn_ms = 0.0;
            state.clock_ms = 2000.0;
            match try_spawn_book(&mut state) {
                Some(_) => spawned += 1,
                None => blocked += 1,
            }
        }
        assert!(spawned > 0, "interval never rolled low");
        assert!(blocked > 0, "interval never rolled high");
    }
}
