//! Terminal presentation: layout, colours, rendering and input mapping.
//!
//! Rendering never mutates anything. Input mapping produces a [`Command`]
//! which the event loop applies to the session.

pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

pub use input::{command_for_key, command_for_mouse, Command};
pub use layout::GameLayout;
pub use render::draw;
