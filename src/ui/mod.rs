//! # User Interface Module
//!
//! Dear ImGui overlay for the viewer: the help panel with camera status, and
//! in the GUI variant the exit menu, settings dropdown and confirmation
//! dialog.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`overlay`] - the panels themselves, drawn from a [`DrawRequest`]
//! - [`UiFlags`] - which panels are visible, written only by the input mapper
//! - [`OverlayResponse`] - what was clicked this frame
//!
//! ## Data Flow
//!
//! The overlay never mutates state. It reads the frame's draw request,
//! returns an [`OverlayResponse`], and the frame driver folds that back into
//! the [`UiFlags`] through the input mapper.
//!
//! [`DrawRequest`]: crate::frame::DrawRequest

pub mod flags;
pub mod manager;
pub mod overlay;
pub mod response;

// Re-export main types
pub use flags::{DropdownState, UiFlags};
pub use manager::UiManager;
pub use overlay::draw_overlay;
pub use response::{DialogResult, OverlayResponse};
