//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating key presses
//! and header mouse gestures.

use crate::config::keybindings::KeyBindings;
use crate::model::{user_schema, ColumnId, Table, User};
use crate::source::{GeneratedProvider, LoadState};
use crate::state::{PageAction, TableState, HANDLE_WIDTH};
use crate::view::{ColorConfig, TableStyles, TuiApp};
use crate::view_state::Projection;
use chrono::{DateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Fixed "today" so derived columns are stable across runs.
pub fn reference_today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// `count` generated users registered before [`reference_today`].
pub fn sample_users(count: usize) -> Vec<User> {
    GeneratedProvider::with_reference(count, 42, reference_today()).generate()
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Harness over `users` with a 160x24 terminal, wide enough for every column.
    pub fn with_users(users: Vec<User>, page_size: usize) -> Self {
        Self::with_users_and_size(users, page_size, 160, 24)
    }

    /// Harness over `users` with a custom terminal size.
    pub fn with_users_and_size(users: Vec<User>, page_size: usize, width: u16, height: u16) -> Self {
        let schema = user_schema(reference_today()).unwrap();
        let data = match Table::new(schema, users) {
            Ok(table) if table.is_empty() => LoadState::Empty,
            Ok(table) => LoadState::Ready(table),
            Err(e) => panic!("test users must build a table: {e}"),
        };
        Self::with_data(data, page_size, width, height)
    }

    /// Harness over an arbitrary load outcome.
    pub fn with_data(
        data: LoadState<Table<User>>,
        page_size: usize,
        width: u16,
        height: u16,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut app = TuiApp::with_terminal(
            terminal,
            data,
            page_size,
            KeyBindings::default(),
            TableStyles::with_color_config(ColorConfig::with_colors(false)),
        );
        app.draw().unwrap();
        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        } else {
            self.app.draw().unwrap();
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.app.draw().unwrap();
    }

    /// Left button pressed at a point.
    pub fn mouse_down(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Pointer moved with the left button held.
    pub fn mouse_drag(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row);
    }

    /// Left button released at a point.
    pub fn mouse_up(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
    }

    /// Press and release at the same point.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.mouse_down(column, row);
        self.mouse_up(column, row);
    }

    /// Ids of the header cells drawn in the last frame, left to right.
    pub fn header_ids(&self) -> Vec<String> {
        self.app
            .last_layouts()
            .header
            .cells()
            .iter()
            .map(|c| c.id.as_str().to_string())
            .collect()
    }

    /// Screen point of a column's drag handle, from the last frame.
    pub fn handle_point(&self, id: &str) -> (u16, u16) {
        let layout = &self.app.last_layouts().header;
        let cell = layout
            .cells()
            .iter()
            .find(|c| c.id == id)
            .unwrap_or_else(|| panic!("column {id} is not on screen"));
        (cell.x, layout.y())
    }

    /// Screen point inside a column's label, from the last frame.
    pub fn label_point(&self, id: &str) -> (u16, u16) {
        let (x, y) = self.handle_point(id);
        (x + HANDLE_WIDTH, y)
    }

    /// Screen point of a pagination button, from the last frame.
    pub fn nav_point(&self, action: PageAction) -> Option<(u16, u16)> {
        let nav = &self.app.last_layouts().nav;
        let button = nav.buttons().iter().find(|b| b.action == action)?;
        Some((button.x, nav.y()))
    }

    /// Click a column's sort label.
    pub fn click_label(&mut self, id: &str) {
        let (x, y) = self.label_point(id);
        self.click_at(x, y);
    }

    /// Drag a column by its handle and drop it on another column's label.
    pub fn drag_column(&mut self, from: &str, to: &str) {
        let (fx, fy) = self.handle_point(from);
        let (tx, ty) = self.label_point(to);
        self.mouse_down(fx, fy);
        self.mouse_drag(tx, ty);
        self.mouse_up(tx, ty);
    }

    /// Committed table state.
    pub fn state(&self) -> &TableState {
        self.app.state()
    }

    /// Current grid, drag preview included.
    pub fn projection(&self) -> Projection {
        self.app.projection().expect("table should be loaded")
    }

    /// Column ids in display order.
    pub fn column_order(&self) -> Vec<String> {
        self.state()
            .column_order
            .ids()
            .iter()
            .map(|c: &ColumnId| c.as_str().to_string())
            .collect()
    }

    /// Column with keyboard focus.
    pub fn focused(&self) -> Option<&ColumnId> {
        self.app.focused()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.app.header().drag().is_dragging()
    }

    /// Check if app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string.
    pub fn render_to_string(&mut self) -> String {
        self.app.draw().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
