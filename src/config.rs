//! Startup configuration
//!
//! The viewer has no runtime configuration file; everything is fixed at
//! startup. The defaults below are the values the viewer ships with.

use winit::keyboard::KeyCode;

/// Default window width in logical pixels
pub const SCREEN_WIDTH: u32 = 1200;
/// Default window height in logical pixels
pub const SCREEN_HEIGHT: u32 = 600;
/// Frames per second the loop is paced at
pub const TARGET_FPS: u32 = 60;
/// Number of random columns placed in the scene
pub const COLUMN_COUNT: usize = 20;
/// Window title
pub const WINDOW_TITLE: &str = "vimcity";

/// Which flavour of the viewer is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Help panel only. Escape closes the window.
    #[default]
    Plain,
    /// Adds the menu, settings dropdown and exit confirmation dialog.
    /// Escape toggles the menu instead of closing.
    Gui,
}

impl Variant {
    /// Key that raises the window close signal directly, if any
    pub fn exit_key(self) -> Option<KeyCode> {
        match self {
            Variant::Plain => Some(KeyCode::Escape),
            Variant::Gui => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub target_fps: u32,
    pub column_count: usize,
    pub title: String,
    pub variant: Variant,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            column_count: COLUMN_COUNT,
            title: WINDOW_TITLE.to_owned(),
            variant: Variant::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Time budget for one tick at the target frame rate
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_values() {
        let config = ViewerConfig::default();
        assert_eq!(config.screen_width, 1200);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.column_count, 20);
        assert_eq!(config.variant, Variant::Plain);
    }

    #[test]
    fn test_only_plain_variant_has_exit_key() {
        assert_eq!(Variant::Plain.exit_key(), Some(KeyCode::Escape));
        assert_eq!(Variant::Gui.exit_key(), None);
    }

    #[test]
    fn test_frame_interval() {
        let config = ViewerConfig::default();
        let interval = config.frame_interval().as_secs_f64();
        assert!((interval - 1.0 / 60.0).abs() < 1e-9);
    }
}
