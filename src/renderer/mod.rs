//! Rendering module
//!
//! `scene` turns a state snapshot into shapes; `canvas` paints them with the
//! browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use shapes::{Color, Shape, colors};
