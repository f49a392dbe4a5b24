/// Validation applied before a search may be dispatched: anything non-empty
/// passes, including whitespace (the catalog search accepts it as-is).
pub fn validate_input(value: &str) -> bool {
    !value.is_empty()
}

/// Owns the search box buffer and the submit gate in front of the store.
pub struct SearchHandler {
    query: String,
}

impl SearchHandler {
    pub fn new() -> Self {
        SearchHandler {
            query: String::new(),
        }
    }

    pub fn add_char_to_query(&mut self, char: char) {
        self.query.push(char);
    }

    pub fn remove_last_char(&mut self) {
        self.query.pop();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Clean Search resets the buffer along with the store's narrowed view.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// The term to dispatch, if the buffer passes validation. An empty
    /// buffer submits nothing.
    pub fn submit(&self) -> Option<String> {
        validate_input(&self.query).then(|| self.query.clone())
    }
}
