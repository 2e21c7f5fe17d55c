//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default arrow and vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup. Terminals disagree on
    /// whether shifted symbols such as `>` carry SHIFT, so a character key
    /// that misses is retried without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&normalized) {
            return Some(*action);
        }

        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SHIFT) => self
                .bindings
                .get(&KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT))
                .copied(),
            _ => None,
        }
    }

    /// Bind a key, replacing any previous binding for it.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let plain = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        // Pagination
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::FirstPage,
        );
        bindings.insert(plain('g'), KeyAction::FirstPage);
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(plain('h'), KeyAction::PrevPage);
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(plain('l'), KeyAction::NextPage);
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::LastPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::LastPage,
        );
        bindings.insert(plain('+'), KeyAction::GrowPage);
        bindings.insert(plain('='), KeyAction::GrowPage);
        bindings.insert(plain('-'), KeyAction::ShrinkPage);

        // Column focus and actions
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::FocusNextColumn,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::FocusPrevColumn,
        );
        bindings.insert(plain('s'), KeyAction::ToggleSort);
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::ToggleSort,
        );
        bindings.insert(plain('<'), KeyAction::MoveColumnLeft);
        bindings.insert(plain('>'), KeyAction::MoveColumnRight);
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::CancelGesture,
        );

        // Application controls
        bindings.insert(plain('q'), KeyAction::Quit);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
