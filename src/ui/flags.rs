//! UI state shared between the input mapper and the overlay
//!
//! The overlay only reads these flags. Every write goes through
//! [`crate::input::InputMapper`], either from a key press or from an
//! [`OverlayResponse`](super::response::OverlayResponse) folded back after
//! the overlay was drawn.

/// Scratch state of the settings dropdown.
///
/// `active` is the selected entry, `edit_mode` whether the list is open.
/// Neither feeds anything else yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropdownState {
    pub active: i32,
    pub edit_mode: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiFlags {
    /// Help panel with the controls and camera status
    pub menu_visible: bool,
    /// The user confirmed quitting through the dialog
    pub exit_requested: bool,
    /// Menu box with the settings dropdown and the quit button (GUI only)
    pub confirm_exit_visible: bool,
    /// "Do you really want to exit?" dialog is waiting for an answer (GUI only)
    pub confirm_choice_pending: bool,
    pub dropdown: DropdownState,
}
