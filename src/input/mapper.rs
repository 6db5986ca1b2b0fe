//! Key presses and overlay clicks to state changes
//!
//! Each tick the mapper gets at most one key press. A recognized key causes
//! exactly one [`KeyAction`]; anything else is a no-op. In the GUI variant the
//! overlay's widget results are folded back through here as well, so the UI
//! flags have a single writer.

use log::{debug, info};
use winit::keyboard::KeyCode;

use crate::{
    config::Variant,
    gfx::camera::CameraMode,
    session::Session,
    ui::{DialogResult, OverlayResponse, UiFlags},
};

use super::keys::Key;

/// Dropdown entry the S shortcut jumps to
pub const SETTINGS_SHORTCUT_ENTRY: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SetMode(CameraMode),
    ToggleMenu,
    ToggleProjection,
    ToggleExitMenu,
    SelectSettings,
    RequestExitConfirmation,
    ConfirmExit,
    CancelExit,
}

#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    variant: Variant,
}

impl InputMapper {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Applies the key pressed this tick, if any, and returns what it did
    pub fn handle_key(&self, session: &mut Session, pressed: Option<KeyCode>) -> Option<KeyAction> {
        let code = pressed?;
        debug!("Pressed key: {:?}", code);

        let action = self.resolve(&session.flags, code)?;
        self.apply(session, action);
        Some(action)
    }

    /// Works out which action a key stands for given the current UI state
    pub fn resolve(&self, flags: &UiFlags, code: KeyCode) -> Option<KeyAction> {
        let key = Key::from_key_code(code)?;

        if let Some(mode) = key.camera_mode() {
            return Some(KeyAction::SetMode(mode));
        }

        match (key, self.variant) {
            (Key::M, _) => Some(KeyAction::ToggleMenu),
            (Key::P, _) => Some(KeyAction::ToggleProjection),
            (Key::Escape, Variant::Gui) => Some(KeyAction::ToggleExitMenu),
            (Key::S, Variant::Gui) if flags.confirm_exit_visible => Some(KeyAction::SelectSettings),
            (Key::Q, Variant::Gui) if flags.confirm_exit_visible => {
                Some(KeyAction::RequestExitConfirmation)
            }
            (Key::Y, Variant::Gui) if flags.confirm_exit_visible && flags.confirm_choice_pending => {
                Some(KeyAction::ConfirmExit)
            }
            (Key::N, Variant::Gui) if flags.confirm_exit_visible && flags.confirm_choice_pending => {
                Some(KeyAction::CancelExit)
            }
            _ => None,
        }
    }

    pub fn apply(&self, session: &mut Session, action: KeyAction) {
        let flags = &mut session.flags;
        match action {
            KeyAction::SetMode(mode) => session.camera.set_mode(mode),
            KeyAction::ToggleMenu => flags.menu_visible = !flags.menu_visible,
            KeyAction::ToggleProjection => session.camera.toggle_projection(),
            KeyAction::ToggleExitMenu => flags.confirm_exit_visible = !flags.confirm_exit_visible,
            KeyAction::SelectSettings => flags.dropdown.active = SETTINGS_SHORTCUT_ENTRY,
            KeyAction::RequestExitConfirmation => flags.confirm_choice_pending = true,
            // Keyboard answers go through the same result convention as the dialog buttons
            KeyAction::ConfirmExit => fold_dialog_result(flags, DialogResult::Yes),
            KeyAction::CancelExit => fold_dialog_result(flags, DialogResult::Closed),
        }
    }

    /// Folds the overlay's widget results into the UI flags.
    ///
    /// Returns true when the user confirmed quitting.
    pub fn apply_overlay(&self, session: &mut Session, response: &OverlayResponse) -> bool {
        if self.variant != Variant::Gui {
            return false;
        }

        let flags = &mut session.flags;
        if response.dropdown_clicked {
            flags.dropdown.edit_mode = !flags.dropdown.edit_mode;
        }
        if let Some(selection) = response.dropdown_selection {
            flags.dropdown.active = selection;
        }
        if response.quit_clicked {
            flags.confirm_choice_pending = true;
        }
        if flags.confirm_choice_pending {
            fold_dialog_result(flags, response.dialog);
        }

        flags.exit_requested
    }
}

/// `0` (closed) and `2` (no) both cancel, `1` (yes) quits, anything else waits
fn fold_dialog_result(flags: &mut UiFlags, result: DialogResult) {
    let raw = result.raw();
    if raw == 0 || raw == 2 {
        flags.confirm_choice_pending = false;
    } else if raw == 1 {
        info!("Exit confirmed");
        flags.exit_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn gui() -> (InputMapper, Session) {
        (InputMapper::new(Variant::Gui), Session::new(1200, 600))
    }

    #[test]
    fn test_mode_keys_set_mode_and_reset_up() {
        let mapper = InputMapper::new(Variant::Plain);
        let keys = [
            (KeyCode::Digit1, CameraMode::Free),
            (KeyCode::Digit2, CameraMode::FirstPerson),
            (KeyCode::Digit3, CameraMode::ThirdPerson),
            (KeyCode::Digit4, CameraMode::Orbital),
        ];

        for (code, mode) in keys {
            let mut session = Session::new(1200, 600);
            session.camera.pose.up = Vector3::new(0.3, 0.8, 0.1);

            let action = mapper.handle_key(&mut session, Some(code));
            assert_eq!(action, Some(KeyAction::SetMode(mode)));
            assert_eq!(session.mode(), mode);
            assert_eq!(session.pose().up, Vector3::new(0.0, 1.0, 0.0));
        }
    }

    #[test]
    fn test_menu_toggles_on_each_press() {
        let mapper = InputMapper::new(Variant::Plain);
        let mut session = Session::new(1200, 600);
        for _ in 0..3 {
            mapper.handle_key(&mut session, Some(KeyCode::KeyM));
        }
        assert!(session.flags.menu_visible);
        mapper.handle_key(&mut session, Some(KeyCode::KeyM));
        assert!(!session.flags.menu_visible);
    }

    #[test]
    fn test_p_toggles_projection() {
        let mapper = InputMapper::new(Variant::Plain);
        let mut session = Session::new(1200, 600);
        assert_eq!(
            mapper.handle_key(&mut session, Some(KeyCode::KeyP)),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(session.mode(), CameraMode::ThirdPerson);
        assert_eq!(session.pose().fovy, 20.0);
    }

    #[test]
    fn test_no_key_and_unknown_keys_are_noops() {
        let mapper = InputMapper::new(Variant::Gui);
        let mut session = Session::new(1200, 600);
        let before = session.clone();
        assert_eq!(mapper.handle_key(&mut session, None), None);
        assert_eq!(mapper.handle_key(&mut session, Some(KeyCode::KeyW)), None);
        assert_eq!(mapper.handle_key(&mut session, Some(KeyCode::F5)), None);
        assert_eq!(session, before);
    }

    #[test]
    fn test_plain_variant_ignores_gui_keys() {
        let mapper = InputMapper::new(Variant::Plain);
        let mut session = Session::new(1200, 600);
        session.flags.confirm_exit_visible = true;
        session.flags.confirm_choice_pending = true;
        for code in [KeyCode::Escape, KeyCode::KeyS, KeyCode::KeyQ, KeyCode::KeyY, KeyCode::KeyN] {
            assert_eq!(mapper.handle_key(&mut session, Some(code)), None);
        }
        assert!(!session.flags.exit_requested);
    }

    #[test]
    fn test_escape_toggles_exit_menu() {
        let (mapper, mut session) = gui();
        mapper.handle_key(&mut session, Some(KeyCode::Escape));
        assert!(session.flags.confirm_exit_visible);
        mapper.handle_key(&mut session, Some(KeyCode::Escape));
        assert!(!session.flags.confirm_exit_visible);
    }

    #[test]
    fn test_menu_shortcuts_need_open_menu() {
        let (mapper, mut session) = gui();
        assert_eq!(mapper.handle_key(&mut session, Some(KeyCode::KeyS)), None);
        assert_eq!(mapper.handle_key(&mut session, Some(KeyCode::KeyQ)), None);
        assert_eq!(session.flags.dropdown.active, 0);
        assert!(!session.flags.confirm_choice_pending);

        mapper.handle_key(&mut session, Some(KeyCode::Escape));
        assert_eq!(
            mapper.handle_key(&mut session, Some(KeyCode::KeyS)),
            Some(KeyAction::SelectSettings)
        );
        assert_eq!(session.flags.dropdown.active, SETTINGS_SHORTCUT_ENTRY);
    }

    #[test]
    fn test_quit_then_no_cancels() {
        let (mapper, mut session) = gui();
        mapper.handle_key(&mut session, Some(KeyCode::Escape));
        mapper.handle_key(&mut session, Some(KeyCode::KeyQ));
        assert!(session.flags.confirm_choice_pending);

        assert_eq!(
            mapper.handle_key(&mut session, Some(KeyCode::KeyN)),
            Some(KeyAction::CancelExit)
        );
        assert!(!session.flags.confirm_choice_pending);
        assert!(!session.flags.exit_requested);
        assert!(session.flags.confirm_exit_visible);
    }

    #[test]
    fn test_quit_then_yes_requests_exit() {
        let (mapper, mut session) = gui();
        mapper.handle_key(&mut session, Some(KeyCode::Escape));
        mapper.handle_key(&mut session, Some(KeyCode::KeyQ));
        mapper.handle_key(&mut session, Some(KeyCode::KeyY));
        assert!(session.flags.exit_requested);
    }

    #[test]
    fn test_yes_without_pending_dialog_is_ignored() {
        let (mapper, mut session) = gui();
        mapper.handle_key(&mut session, Some(KeyCode::Escape));
        assert_eq!(mapper.handle_key(&mut session, Some(KeyCode::KeyY)), None);
        assert!(!session.flags.exit_requested);
    }

    #[test]
    fn test_overlay_dialog_results() {
        let (mapper, mut session) = gui();
        session.flags.confirm_exit_visible = true;

        for raw in [0, 2] {
            session.flags.confirm_choice_pending = true;
            let response = OverlayResponse {
                dialog: DialogResult::from_raw(raw),
                ..Default::default()
            };
            assert!(!mapper.apply_overlay(&mut session, &response));
            assert!(!session.flags.confirm_choice_pending);
        }

        session.flags.confirm_choice_pending = true;
        assert!(!mapper.apply_overlay(&mut session, &OverlayResponse::default()));
        assert!(session.flags.confirm_choice_pending);

        let yes = OverlayResponse {
            dialog: DialogResult::Yes,
            ..Default::default()
        };
        assert!(mapper.apply_overlay(&mut session, &yes));
    }

    #[test]
    fn test_overlay_widgets() {
        let (mapper, mut session) = gui();
        session.flags.confirm_exit_visible = true;

        let click = OverlayResponse {
            dropdown_clicked: true,
            ..Default::default()
        };
        mapper.apply_overlay(&mut session, &click);
        assert!(session.flags.dropdown.edit_mode);

        let pick = OverlayResponse {
            dropdown_clicked: true,
            dropdown_selection: Some(2),
            ..Default::default()
        };
        mapper.apply_overlay(&mut session, &pick);
        assert!(!session.flags.dropdown.edit_mode);
        assert_eq!(session.flags.dropdown.active, 2);

        let quit = OverlayResponse {
            quit_clicked: true,
            ..Default::default()
        };
        assert!(!mapper.apply_overlay(&mut session, &quit));
        assert!(session.flags.confirm_choice_pending);
    }

    #[test]
    fn test_plain_variant_ignores_overlay_results() {
        let mapper = InputMapper::new(Variant::Plain);
        let mut session = Session::new(1200, 600);
        let response = OverlayResponse {
            quit_clicked: true,
            dialog: DialogResult::Yes,
            ..Default::default()
        };
        assert!(!mapper.apply_overlay(&mut session, &response));
        assert_eq!(session.flags, UiFlags::default());
    }
}
