//! Minimap overlay library crate.
//!
//! The binary crate (`main.rs`) is a demo host. This library exposes the
//! overlay so a game can add [`minimap::MinimapPlugin`] and so `tests/`
//! integration tests can drive it without a window or GPU.

pub mod shared;
pub mod data;
pub mod input;
pub mod minimap;
pub mod render;
