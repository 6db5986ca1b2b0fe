/// Answer of the exit confirmation dialog.
///
/// Raw form is a message box code: `-1` while unanswered, `0` when the box
/// is dismissed with its close button, then one value per button starting at
/// `1` (`1` yes, `2` no).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogResult {
    #[default]
    Pending,
    Closed,
    Yes,
    No,
}

impl DialogResult {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => DialogResult::Closed,
            1 => DialogResult::Yes,
            2 => DialogResult::No,
            _ => DialogResult::Pending,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            DialogResult::Pending => -1,
            DialogResult::Closed => 0,
            DialogResult::Yes => 1,
            DialogResult::No => 2,
        }
    }
}

/// What the user did with the overlay widgets during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayResponse {
    /// The dropdown header or one of its entries was clicked
    pub dropdown_clicked: bool,
    /// Entry picked from the open dropdown list
    pub dropdown_selection: Option<i32>,
    pub quit_clicked: bool,
    pub dialog: DialogResult,
}
