//! Overlay panels drawn over the scene
//!
//! Pure immediate-mode drawing: every function reads the frame's
//! [`DrawRequest`] and reports clicks in an [`OverlayResponse`]. Nothing here
//! writes UI state; the frame driver folds the response back in.

use imgui::{Condition, StyleColor, Ui, WindowFlags};

use crate::{
    frame::DrawRequest,
    gfx::{
        camera::{CameraMode, CameraPose},
        scene::Color,
    },
};

use super::{
    flags::DropdownState,
    response::{DialogResult, OverlayResponse},
};

pub const CONTROLS_TEXT: [&str; 6] = [
    "Camera controls:",
    "- Move keys: W, A, S, D, Space, Left-Ctrl",
    "- Look around: arrow keys or mouse",
    "- Camera mode keys: 1, 2, 3, 4",
    "- Zoom keys: num-plus, num-minus or mouse scroll",
    "- Camera projection key: P",
];

pub const SETTINGS_ENTRIES: [&str; 3] = ["(S) Settings", "TWO", "THREE"];

pub const CONFIRM_TITLE: &str = "Close Window";
const CONFIRM_MESSAGE: &str = "Do you really want to exit?";

const PANEL_HEIGHT: f32 = 100.0;
const CONTROLS_PANEL: ([f32; 2], f32) = ([5.0, 5.0], 330.0);
const STATUS_PANEL_WIDTH: f32 = 195.0;
const MENU_WIDTH: f32 = 120.0;
const WIDGET_HEIGHT: f32 = 30.0;

const PANEL_FLAGS: WindowFlags = WindowFlags::NO_DECORATION
    .union(WindowFlags::NO_MOVE)
    .union(WindowFlags::NO_SAVED_SETTINGS)
    .union(WindowFlags::NO_FOCUS_ON_APPEARING)
    .union(WindowFlags::NO_NAV)
    .union(WindowFlags::ALWAYS_AUTO_RESIZE);

/// Camera status text, coordinates zero-padded to six characters
pub fn status_lines(mode: CameraMode, pose: &CameraPose) -> [String; 6] {
    let triple = |v: cgmath::Vector3<f32>| format!("({:06.3}, {:06.3}, {:06.3})", v.x, v.y, v.z);
    [
        "Camera status:".to_owned(),
        format!("- Mode: {}", mode.label()),
        format!("- Projection: {}", pose.projection.label()),
        format!("- Position: {}", triple(pose.position)),
        format!("- Target: {}", triple(pose.target)),
        format!("- Up: {}", triple(pose.up)),
    ]
}

/// Draws every panel the request asks for and collects what was clicked
pub fn draw_overlay(ui: &Ui, request: &DrawRequest, dropdown: DropdownState) -> OverlayResponse {
    let mut response = OverlayResponse::default();
    let [width, height] = ui.io().display_size;

    if request.show_help {
        draw_help(ui, request, width);
    }
    if request.show_exit_menu {
        draw_exit_menu(ui, [width / 2.0, height / 2.0], dropdown, &mut response);
    }
    if request.show_confirm_dialog {
        response.dialog = draw_confirm_dialog(ui);
    }

    response
}

fn draw_help(ui: &Ui, request: &DrawRequest, display_width: f32) {
    let _bg = ui.push_style_color(StyleColor::WindowBg, Color::SKY_BLUE.fade(0.5).to_f32_array());
    let _border = ui.push_style_color(StyleColor::Border, Color::BLUE.to_f32_array());
    let _text = ui.push_style_color(StyleColor::Text, Color::BLACK.to_f32_array());

    let (position, width) = CONTROLS_PANEL;
    ui.window("##controls")
        .position(position, Condition::Always)
        .size_constraints([width, PANEL_HEIGHT], [f32::MAX, f32::MAX])
        .flags(PANEL_FLAGS)
        .build(|| {
            for line in CONTROLS_TEXT {
                ui.text(line);
            }
        });

    let status = status_lines(request.mode, &request.pose);
    ui.window("##status")
        .position([display_width - 200.0, 5.0], Condition::Always)
        .size_constraints([STATUS_PANEL_WIDTH, PANEL_HEIGHT], [f32::MAX, f32::MAX])
        .flags(PANEL_FLAGS)
        .build(|| {
            for line in &status {
                ui.text(line);
            }
        });
}

fn draw_exit_menu(ui: &Ui, center: [f32; 2], dropdown: DropdownState, response: &mut OverlayResponse) {
    let [mx, my] = center;
    let left = mx - MENU_WIDTH / 2.0;

    ui.window("Menu")
        .position([left, my - 75.0], Condition::Always)
        .size([MENU_WIDTH, 150.0 + WIDGET_HEIGHT], Condition::Always)
        .flags(
            WindowFlags::NO_RESIZE
                | WindowFlags::NO_MOVE
                | WindowFlags::NO_COLLAPSE
                | WindowFlags::NO_SAVED_SETTINGS
                | WindowFlags::NO_SCROLLBAR,
        )
        .build(|| {
            // Header shows the active entry; clicking it opens or closes the list
            let active = usize::try_from(dropdown.active)
                .ok()
                .and_then(|i| SETTINGS_ENTRIES.get(i))
                .copied()
                .unwrap_or(SETTINGS_ENTRIES[0]);
            ui.set_cursor_screen_pos([left, my + 45.0]);
            if ui.button_with_size(format!("{active}##settings"), [MENU_WIDTH, WIDGET_HEIGHT]) {
                response.dropdown_clicked = true;
            }

            ui.set_cursor_screen_pos([left, my + 75.0]);
            if ui.button_with_size("(Q) Quit", [MENU_WIDTH, WIDGET_HEIGHT]) {
                response.quit_clicked = true;
            }
        });

    if dropdown.edit_mode {
        ui.window("##settings_list")
            .position([left, my + 75.0], Condition::Always)
            .size([MENU_WIDTH, WIDGET_HEIGHT * SETTINGS_ENTRIES.len() as f32], Condition::Always)
            .flags(PANEL_FLAGS & !WindowFlags::ALWAYS_AUTO_RESIZE)
            .focused(true)
            .build(|| {
                for (index, entry) in SETTINGS_ENTRIES.iter().enumerate() {
                    let selected = index as i32 == dropdown.active;
                    if ui.selectable_config(entry).selected(selected).build() {
                        response.dropdown_clicked = true;
                        response.dropdown_selection = Some(index as i32);
                    }
                }
            });
    }
}

/// Modal question over the dimmed screen. The dim colour is set once in
/// [`UiManager::new`](super::UiManager::new).
fn draw_confirm_dialog(ui: &Ui) -> DialogResult {
    let mut result = DialogResult::Pending;
    let mut open = true;

    ui.open_popup(CONFIRM_TITLE);
    ui.modal_popup_config(CONFIRM_TITLE)
        .opened(&mut open)
        .always_auto_resize(true)
        .build(|| {
            ui.text(CONFIRM_MESSAGE);
            ui.separator();
            if ui.button_with_size("(Y) Yes", [110.0, 0.0]) {
                result = DialogResult::Yes;
                ui.close_current_popup();
            }
            ui.same_line();
            if ui.button_with_size("(N) No", [110.0, 0.0]) {
                result = DialogResult::No;
                ui.close_current_popup();
            }
        });

    if !open {
        result = DialogResult::Closed;
    }
    result
}
