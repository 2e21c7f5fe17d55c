//! Domain-level keyboard actions independent of key bindings.

/// User intents reachable from the keyboard.
///
/// These represent intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Jump to the first page. Default: Home/g
    FirstPage,
    /// Go back one page. Default: ←/h
    PrevPage,
    /// Go forward one page. Default: →/l
    NextPage,
    /// Jump to the last page. Default: End/G
    LastPage,
    /// Show more rows per page. Default: +
    GrowPage,
    /// Show fewer rows per page. Default: -
    ShrinkPage,

    // Column focus (keyboard stand-in for pointing at a header)
    /// Focus the next column header. Default: Tab
    FocusNextColumn,
    /// Focus the previous column header. Default: Shift+Tab
    FocusPrevColumn,
    /// Cycle the sort of the focused column. Default: s/Enter
    ToggleSort,
    /// Move the focused column one slot left. Default: <
    MoveColumnLeft,
    /// Move the focused column one slot right. Default: >
    MoveColumnRight,
    /// Abandon a drag or pressed header. Default: Esc
    CancelGesture,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action changes pagination.
    pub fn is_pagination(self) -> bool {
        matches!(
            self,
            KeyAction::FirstPage
                | KeyAction::PrevPage
                | KeyAction::NextPage
                | KeyAction::LastPage
                | KeyAction::GrowPage
                | KeyAction::ShrinkPage
        )
    }
}
