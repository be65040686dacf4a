//! Small stateful helpers behind the TUI's list and input widgets.

use ratatui::widgets::{ListItem, ListState, ScrollbarState};

/// A bounded list shown newest-first, with selection and scrollbar state.
///
/// Items are stored with the newest at index 0 so the list can be drawn
/// bottom-to-top.
pub struct ScrollableList {
    max_items: usize,
    pub list_items: Vec<ListItem<'static>>,
    pub list_state: ListState,
    pub scroll_state: ScrollbarState,
}

impl ScrollableList {
    pub fn new(max_items: usize) -> Self {
        Self {
            max_items,
            list_items: Vec::new(),
            list_state: ListState::default(),
            scroll_state: ScrollbarState::new(0),
        }
    }

    fn sync_scroll(&mut self) {
        let position = self.list_state.selected().unwrap_or(0);
        // The list is drawn bottom-to-top, so the scrollbar runs the other way.
        let from_top = self.list_items.len().saturating_sub(position + 1);
        self.scroll_state = ScrollbarState::new(self.list_items.len()).position(from_top);
    }

    pub fn push(&mut self, item: ListItem<'static>) {
        self.list_items.insert(0, item);
        self.list_items.truncate(self.max_items);
        self.jump_to_last();
    }

    /// Move towards older items.
    pub fn move_up(&mut self) {
        if self.list_items.is_empty() {
            return;
        }
        let last = self.list_items.len() - 1;
        let next = self.list_state.selected().map_or(0, |idx| (idx + 1).min(last));
        self.list_state.select(Some(next));
        self.sync_scroll();
    }

    /// Move towards newer items.
    pub fn move_down(&mut self) {
        if self.list_items.is_empty() {
            return;
        }
        let next = self.list_state.selected().map_or(0, |idx| idx.saturating_sub(1));
        self.list_state.select(Some(next));
        self.sync_scroll();
    }

    /// Jump to the oldest item.
    pub fn jump_to_first(&mut self) {
        if self.list_items.is_empty() {
            return;
        }
        self.list_state.select(Some(self.list_items.len() - 1));
        self.sync_scroll();
    }

    /// Jump to the newest item.
    pub fn jump_to_last(&mut self) {
        if self.list_items.is_empty() {
            return;
        }
        self.list_state.select(Some(0));
        self.sync_scroll();
    }
}

/// Single-line text input with a char-indexed cursor.
#[derive(Debug, Default)]
pub struct UserInput {
    pub value: String,
    pub char_idx: usize,
}

impl UserInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_idx(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn input(&mut self, c: char) {
        let idx = self.byte_idx();
        self.value.insert(idx, c);
        self.char_idx += 1;
    }

    pub fn backspace(&mut self) {
        if self.char_idx == 0 {
            return;
        }
        self.char_idx -= 1;
        let idx = self.byte_idx();
        self.value.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.char_idx >= self.char_count() {
            return;
        }
        let idx = self.byte_idx();
        self.value.remove(idx);
    }

    pub fn move_left(&mut self) {
        self.char_idx = self.char_idx.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.char_idx = (self.char_idx + 1).min(self.char_count());
    }

    pub fn jump_to_first(&mut self) {
        self.char_idx = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.char_idx = self.char_count();
    }

    /// Take the current value and reset the input.
    pub fn submit(&mut self) -> String {
        self.char_idx = 0;
        std::mem::take(&mut self.value)
    }
}
