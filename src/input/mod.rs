//! # Input Module
//!
//! Turns winit events into viewer state changes.
//!
//! - [`FrameInput`] - per-tick snapshot of keyboard and mouse state
//! - [`Key`] - the keys the viewer reacts to
//! - [`InputMapper`] - applies the tick's key press (and GUI results) to a
//!   [`Session`](crate::session::Session)

pub mod frame_input;
pub mod keys;
pub mod mapper;

// Re-export main types
pub use frame_input::FrameInput;
pub use keys::Key;
pub use mapper::{InputMapper, KeyAction};
