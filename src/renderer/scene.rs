//! Scene building: game state snapshot to draw list
//!
//! Reads the state, never mutates it. The whole canvas is redrawn from this
//! list every frame.

use glam::Vec2;

use super::shapes::{Shape, colors};
use crate::consts::{SCHOOL_HEIGHT, SCHOOL_WIDTH};
use crate::settings::Settings;
use crate::sim::GameState;

/// Mountain ranges as (left x, base rise above ground, peak rise above ground).
/// Each range is 400px wide with the peak in the middle.
const MOUNTAINS: [(f32, f32, f32); 5] = [
    (0.0, 100.0, 150.0),
    (100.0, 80.0, 130.0),
    (200.0, 60.0, 110.0),
    (300.0, 90.0, 140.0),
    (400.0, 70.0, 120.0),
];
const MOUNTAIN_WIDTH: f32 = 400.0;

pub const LABEL_FONT: &str = "20px \"Fira Code\"";

/// Build the draw list for one frame, back to front:
/// mountains, books, ground, player, school, label
pub fn build(state: &GameState, settings: &Settings) -> Vec<Shape> {
    let tuning = &state.tuning;
    let ground_top = tuning.ground_top();
    let mut shapes = Vec::with_capacity(MOUNTAINS.len() + state.books.len() + 4);

    if settings.show_mountains {
        for (x, base, peak) in MOUNTAINS {
            shapes.push(Shape::Triangle {
                points: [
                    Vec2::new(x, ground_top - base),
                    Vec2::new(x + MOUNTAIN_WIDTH / 2.0, ground_top - peak),
                    Vec2::new(x + MOUNTAIN_WIDTH, ground_top - base),
                ],
                color: colors::MOUNTAIN,
            });
        }
    }

    for book in &state.books {
        shapes.push(Shape::rect(book.pos, book.size, colors::BOOK));
    }

    shapes.push(Shape::rect(
        Vec2::new(0.0, ground_top),
        Vec2::new(tuning.arena_width, tuning.ground_height),
        colors::GROUND,
    ));

    shapes.push(Shape::rect(
        state.player.pos,
        state.player.size,
        colors::PLAYER,
    ));

    let school_x = tuning.arena_width - SCHOOL_WIDTH;
    let school_top = ground_top - SCHOOL_HEIGHT;
    shapes.push(Shape::rect(
        Vec2::new(school_x, school_top),
        Vec2::new(SCHOOL_WIDTH, SCHOOL_HEIGHT),
        colors::SCHOOL,
    ));
    shapes.push(Shape::Text {
        pos: Vec2::new(school_x + SCHOOL_WIDTH / 2.0 - 20.0, school_top + 30.0),
        text: "BYU",
        font: LABEL_FONT,
        color: colors::LABEL,
    });

    shapes
}
