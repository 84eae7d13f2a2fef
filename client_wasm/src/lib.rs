//! Canvas client for the Pong core
//!
//! Renders `game_core` state onto a 2D canvas, maps keyboard input, and is
//! driven from the page's requestAnimationFrame callback. Button wiring and
//! the score text elements live in the host page, which calls the exported
//! bindings.

pub mod fsm;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::*;
