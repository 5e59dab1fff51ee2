//! Per-frame simulation step
//!
//! The three entry points every host threads the same [`GameState`] through:
//! [`reset`], [`handle_jump`] and [`advance`]. None of them can fail and none
//! of them read a clock; elapsed time always comes from the caller.

use super::collision::player_hits_book;
use super::spawn::try_spawn_book;
use super::state::{GameEvent, GamePhase, GameState, GameView, Player};

/// Start (or restart) a run
///
/// Safe to call in any phase; calling it twice is the same as calling it once.
pub fn reset(state: &mut GameState) {
    state.player = Player::new(&state.tuning);
    state.books.clear();
    state.events.clear();
    state.score = 0;
    state.phase = GamePhase::Running;
    state.last_spawn_ms = state.clock_ms;
    log::info!("Run started (seed {}, t={:.0}ms)", state.seed, state.clock_ms);
}

/// Jump request from the input source
///
/// Ignored while the player is already in the air, and outside a run (the
/// player would otherwise hang mid-jump on a frozen screen). Returns whether
/// a jump actually started.
pub fn handle_jump(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    let jumped = state.player.jump(state.tuning.jump_force);
    if jumped {
        log::trace!("Jump at y={:.1}", state.player.pos.y);
    }
    jumped
}

/// Advance the run by one frame
///
/// Does nothing unless the game is running. Order matters: physics, spawn,
/// scroll and cull, collision, then score.
pub fn advance(state: &mut GameState, delta_ms: f64) -> GameView {
    if state.phase != GamePhase::Running {
        return state.view();
    }

    state.events.clear();
    state.clock_ms += sanitize_delta(delta_ms);

    // Gravity and landing
    let ground_line = state.tuning.ground_line();
    if state.player.integrate(state.tuning.gravity, ground_line) {
        log::debug!("Landed at t={:.0}ms", state.clock_ms);
        state.events.push(GameEvent::Landed);
    }

    try_spawn_book(state);

    // Scroll books left and drop the ones that are fully off-screen
    let speed = state.tuning.game_speed;
    let before = state.books.len();
    state.books.retain_mut(|book| {
        book.pos.x -= speed;
        !book.is_off_screen()
    });
    for _ in state.books.len()..before {
        state.events.push(GameEvent::BookCleared);
    }

    let player_rect = state.player.rect();
    if state
        .books
        .iter()
        .any(|book| player_hits_book(&player_rect, &book.rect()))
    {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Collision);
        log::info!("Game over! Score: {}", state.score);
        return state.view();
    }

    state.score += 1;
    log::trace!(
        "tick score={} y={:.1} books={}",
        state.score,
        state.player.pos.y,
        state.books.len()
    );
    state.view()
}

/// Frame deltas from the host can be garbage (tab resume, clock skew)
fn sanitize_delta(delta_ms: f64) -> f64 {
    if delta_ms.is_finite() && delta_ms >= 0.0 {
        delta_ms
    } else {
        log::warn!("Ignoring invalid frame delta: {delta_ms}");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Book;
    use crate::tuning::Tuning;

    const FRAME_MS: f64 = 16.0;

    /// Running game whose spawn timer never fires
    fn quiet_game() -> GameState {
        let tuning = Tuning {
            base_book_interval_ms: 1.0e12,
            book_interval_variation_ms: 0.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(tuning, 1);
        reset(&mut state);
        state
    }

    #[test]
    fn test_advance_while_idle_is_noop() {
        let mut state = GameState::new(5);
        let view = advance(&mut state, FRAME_MS);
        assert!(!view.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.clock_ms, 0.0);
    }

    #[test]
    fn test_jump_ignored_outside_run() {
        let mut state = GameState::new(5);
        assert!(!handle_jump(&mut state));
        assert!(!state.player.airborne);

        let tuning = state.tuning.clone();
        reset(&mut state);
        state.books.push(Book::new(60.0, 40.0, &tuning));
        advance(&mut state, FRAME_MS);
        assert!(state.game_over());
        assert!(!handle_jump(&mut state));
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_reset_enters_running() {
        let mut state = GameState::new(5);
        reset(&mut state);
        assert_eq!(state.phase, GamePhase::Running);
        let view = advance(&mut state, FRAME_MS);
        assert_eq!(view.score, 1);
        assert!(view.running);
        assert!(!view.game_over);
    }

    #[test]
    fn test_reset_records_spawn_time() {
        let mut state = quiet_game();
        for _ in 0..10 {
            advance(&mut state, FRAME_MS);
        }
        reset(&mut state);
        assert_eq!(state.last_spawn_ms, 160.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_collision_ends_run_without_scoring() {
        let mut state = quiet_game();
        advance(&mut state, FRAME_MS);
        let tuning = state.tuning.clone();
        state.books.push(Book::new(60.0, 40.0, &tuning));

        let view = advance(&mut state, FRAME_MS);
        assert!(view.game_over);
        assert!(!view.running);
        assert_eq!(view.score, 1);
        assert_eq!(state.events.last(), Some(&GameEvent::Collision));
    }

    #[test]
    fn test_game_over_freezes_everything() {
        let mut state = quiet_game();
        let tuning = state.tuning.clone();
        state.books.push(Book::new(60.0, 40.0, &tuning));
        advance(&mut state, FRAME_MS);
        assert!(state.game_over());

        let frozen_books = state.books.clone();
        let frozen_clock = state.clock_ms;
        for _ in 0..5 {
            let view = advance(&mut state, FRAME_MS);
            assert_eq!(view.score, 0);
            assert!(view.game_over);
        }
        assert_eq!(state.books, frozen_books);
        assert_eq!(state.clock_ms, frozen_clock);
    }

    #[test]
    fn test_reset_after_game_over_restarts() {
        let mut state = quiet_game();
        let tuning = state.tuning.clone();
        state.books.push(Book::new(60.0, 40.0, &tuning));
        advance(&mut state, FRAME_MS);
        assert!(state.game_over());

        reset(&mut state);
        assert!(state.running());
        assert!(state.books.is_empty());
        assert_eq!(advance(&mut state, FRAME_MS).score, 1);
    }

    #[test]
    fn test_jumping_over_a_book() {
        let mut state = quiet_game();
        let tuning = state.tuning.clone();
        // Apex is ~133px; the book is under the player around the peak
        state.books.push(Book::new(150.0, 40.0, &tuning));
        assert!(handle_jump(&mut state));
        for _ in 0..37 {
            let view = advance(&mut state, FRAME_MS);
            assert!(!view.game_over, "hit the book at score {}", view.score);
        }
    }

    #[test]
    fn test_books_scroll_and_cull() {
        let mut state = quiet_game();
        let tuning = state.tuning.clone();
        state.books.push(Book::new(-24.0, 40.0, &tuning));
        state.books.push(Book::new(400.0, 40.0, &tuning));

        advance(&mut state, FRAME_MS);
        assert_eq!(state.books.len(), 2);
        assert_eq!(state.books[0].pos.x, -29.0);
        assert_eq!(state.books[1].pos.x, 395.0);

        advance(&mut state, FRAME_MS);
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.books[0].pos.x, 390.0);
        assert_eq!(state.events, vec![GameEvent::BookCleared]);
    }

    #[test]
    fn test_first_book_spawns_after_interval() {
        let tuning = Tuning {
            book_interval_variation_ms: 0.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(tuning, 9);
        reset(&mut state);

        // 124 frames = 1984ms, still under 2000ms
        for _ in 0..124 {
            advance(&mut state, FRAME_MS);
        }
        assert!(state.books.is_empty());

        advance(&mut state, FRAME_MS);
        assert_eq!(state.books.len(), 1);
        // Spawned at the edge, then scrolled once
        assert_eq!(state.books[0].pos.x, 895.0);
    }

    #[test]
    fn test_invalid_delta_does_not_move_clock() {
        let mut state = quiet_game();
        advance(&mut state, -50.0);
        advance(&mut state, f64::NAN);
        assert_eq!(state.clock_ms, 0.0);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(4242);
        let mut b = GameState::new(4242);
        reset(&mut a);
        reset(&mut b);
        for i in 0..2000 {
            if i % 90 == 0 {
                handle_jump(&mut a);
                handle_jump(&mut b);
            }
            let va = advance(&mut a, FRAME_MS);
            let vb = advance(&mut b, FRAME_MS);
            assert_eq!(va, vb);
        }
        assert_eq!(a.books, b.books);
        assert_eq!(a.player, b.player);
    }
}
