use ratatui::widgets::TableState;

/// Keeps a row set and the table cursor over it in one place.
pub struct SelectHandler<T> {
    items: Vec<T>,
    state: TableState,
}

impl<T> SelectHandler<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: TableState::default(),
        }
    }

    /// Replaces the rows. A non-empty set starts with the first row
    /// selected; an empty set clears the selection.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if !self.items.is_empty() {
            self.state.select(Some(0));
        } else {
            self.state.select(None);
        }
    }

    pub fn down(&mut self) {
        self.state.select_next();
    }

    pub fn up(&mut self) {
        self.state.select_previous();
    }

    /// Currently selected row. The widget clamps the cursor on draw, so an
    /// out-of-range index between draws simply yields nothing.
    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    // Getters:
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&mut self) -> &mut TableState {
        &mut self.state
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_items_selects_first_row() {
        let mut handler: SelectHandler<u32> = SelectHandler::new();
        handler.set_items(vec![10, 20, 30]);
        assert_eq!(handler.selected(), Some(&10));
    }

    #[test]
    fn test_set_items_empty_clears_selection() {
        let mut handler: SelectHandler<u32> = SelectHandler::new();
        handler.set_items(vec![10]);
        handler.set_items(Vec::new());
        assert_eq!(handler.selected(), None);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_moving_the_cursor() {
        let mut handler: SelectHandler<u32> = SelectHandler::new();
        handler.set_items(vec![10, 20, 30]);
        handler.down();
        assert_eq!(handler.selected(), Some(&20));
        handler.down();
        assert_eq!(handler.selected(), Some(&30));
        handler.up();
        assert_eq!(handler.selected(), Some(&20));
    }

    #[test]
    fn test_cursor_past_the_end_yields_nothing() {
        let mut handler: SelectHandler<u32> = SelectHandler::new();
        handler.set_items(vec![10]);
        handler.down();
        handler.down();
        // The draw pass clamps this; until then the accessor stays safe.
        assert_eq!(handler.selected(), None);
    }
}
