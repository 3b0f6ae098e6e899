//! Grid Snake built around a pure tick engine.
//!
//! [`game::tick`] takes a [`game::Snapshot`] and returns a [`game::TickUpdate`];
//! [`session::Session`] owns the snapshot between ticks and is what a
//! front-end drives.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
