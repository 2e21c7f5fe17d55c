//! TUI rendering and terminal management (impure shell)

pub mod layout;
pub mod pagination_bar;
pub mod styles;
pub mod table;

pub use layout::{render_layout, FrameLayouts, Screen};
pub use pagination_bar::{NavButton, NavLayout};
pub use styles::{ColorConfig, TableStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, ColumnId, KeyAction, Table, User};
use crate::source::LoadState;
use crate::state::{reduce, HeaderController, HeaderRegion, Intent, PageAction, PointerEvent, TableState};
use crate::view_state::{project_with_preview, Projection};
use crossterm::{
    event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Page sizes offered by the grow/shrink keys.
pub const PAGE_SIZE_CHOICES: [usize; 6] = [5, 10, 15, 20, 50, 100];

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    data: LoadState<Table<User>>,
    state: TableState,
    header: HeaderController,
    focused: Option<ColumnId>,
    key_bindings: KeyBindings,
    styles: TableStyles,
    /// Regions of the last drawn frame (for mouse hit-testing)
    last_layouts: FrameLayouts,
    /// Pagination button under a pending press
    pressed_nav: Option<PageAction>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(data: LoadState<Table<User>>, page_size: usize) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            data,
            page_size,
            KeyBindings::default(),
            TableStyles::default(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on input; every
    /// handled event is followed by one redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        data: LoadState<Table<User>>,
        page_size: usize,
        key_bindings: KeyBindings,
        styles: TableStyles,
    ) -> Self {
        let state = match &data {
            LoadState::Ready(table) => {
                TableState::new(table.schema().ids(), table.len(), page_size)
            }
            _ => TableState::new(Vec::new(), 0, page_size),
        };
        let focused = state.column_order.ids().first().cloned();

        Self {
            terminal,
            data,
            state,
            header: HeaderController::new(),
            focused,
            key_bindings,
            styles,
            last_layouts: FrameLayouts::default(),
            pressed_nav: None,
        }
    }

    /// Committed table state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Column with keyboard focus.
    pub fn focused(&self) -> Option<&ColumnId> {
        self.focused.as_ref()
    }

    /// Header gesture state, for drag preview.
    pub fn header(&self) -> &HeaderController {
        &self.header
    }

    /// Regions recorded by the last draw.
    pub fn last_layouts(&self) -> &FrameLayouts {
        &self.last_layouts
    }

    /// The terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The grid as it would be drawn now, drag preview included.
    pub fn projection(&self) -> Option<Projection> {
        match &self.data {
            LoadState::Ready(table) => Some(project_with_preview(
                table,
                &self.state,
                self.header.drag(),
            )),
            _ => None,
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.state = reduce(self.state.clone(), intent);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        if action == KeyAction::Quit {
            info!("Quit requested");
            return true;
        }
        if !self.data.is_ready() {
            return false;
        }

        match action {
            KeyAction::FirstPage => self.dispatch(Intent::SetPage(PageAction::First)),
            KeyAction::PrevPage => self.dispatch(Intent::SetPage(PageAction::Previous)),
            KeyAction::NextPage => self.dispatch(Intent::SetPage(PageAction::Next)),
            KeyAction::LastPage => self.dispatch(Intent::SetPage(PageAction::Last)),
            KeyAction::GrowPage => {
                let current = self.state.pagination.page_size();
                if let Some(&size) = PAGE_SIZE_CHOICES.iter().find(|&&s| s > current) {
                    self.dispatch(Intent::SetPageSize(size));
                }
            }
            KeyAction::ShrinkPage => {
                let current = self.state.pagination.page_size();
                if let Some(&size) = PAGE_SIZE_CHOICES.iter().rev().find(|&&s| s < current) {
                    self.dispatch(Intent::SetPageSize(size));
                }
            }
            KeyAction::FocusNextColumn => self.move_focus(1),
            KeyAction::FocusPrevColumn => self.move_focus(-1),
            KeyAction::ToggleSort => {
                if let Some(id) = self.focused.clone() {
                    self.dispatch(Intent::ToggleSort(id));
                }
            }
            KeyAction::MoveColumnLeft => self.move_focused_column(-1),
            KeyAction::MoveColumnRight => self.move_focused_column(1),
            KeyAction::CancelGesture => {
                self.header.reset();
                self.pressed_nav = None;
            }
            KeyAction::Quit => {}
        }

        false
    }

    /// Move keyboard focus along the display order, wrapping at the ends.
    fn move_focus(&mut self, offset: isize) {
        let ids = self.state.column_order.ids();
        if ids.is_empty() {
            return;
        }
        let current = self
            .focused
            .as_ref()
            .and_then(|id| self.state.column_order.position(id))
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(ids.len() as isize) as usize;
        self.focused = Some(ids[next].clone());
    }

    /// Swap the focused column with its neighbour; focus follows the column.
    fn move_focused_column(&mut self, offset: isize) {
        let Some(focused) = self.focused.clone() else {
            return;
        };
        if let Some(target) = self.state.column_order.neighbour(&focused, offset).cloned() {
            self.dispatch(Intent::Reorder {
                from: focused,
                to: target,
            });
        }
    }

    /// Handle a single mouse event
    ///
    /// Left button gestures on the header drive sort and drag; clicks on
    /// enabled pagination buttons change page. Everything else is ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.data.is_ready() {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_nav = self.last_layouts.nav.action_at(x, y);
                if let HeaderRegion::Handle(id) | HeaderRegion::Label(id) =
                    self.last_layouts.header.hit_test(x, y)
                {
                    self.focused = Some(id);
                }
                self.pointer(PointerEvent::Down { x, y });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer(PointerEvent::Drag { x, y });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(pressed) = self.pressed_nav.take() {
                    if self.last_layouts.nav.action_at(x, y) == Some(pressed) {
                        self.dispatch(Intent::SetPage(pressed));
                    }
                }
                self.pointer(PointerEvent::Up { x, y });
            }
            _ => {}
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        if let Some(intent) = self.header.handle(&self.last_layouts.header, event) {
            self.dispatch(intent);
        }
    }

    /// Render the current frame and record its interactive regions.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let projection = self.projection();
        let screen = match (&self.data, &projection) {
            (LoadState::Ready(_), Some(projection)) => Screen::Table {
                projection,
                focused: self.focused.as_ref(),
            },
            (LoadState::Failed(error), _) => Screen::Failed(error),
            (LoadState::Empty, _) => Screen::Empty,
            _ => Screen::Loading,
        };

        let styles = &self.styles;
        let mut layouts = FrameLayouts::default();
        self.terminal.draw(|frame| {
            layouts = render_layout(frame, screen, styles);
        })?;
        self.last_layouts = layouts;

        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_data(data: LoadState<Table<User>>, page_size: usize) -> Result<(), TuiError> {
    let mut app = TuiApp::new(data, page_size)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
