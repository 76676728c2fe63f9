/// Single-slot provider filter. Holds at most one provider name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    active: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the active provider again clears the filter; any other name
    /// replaces it.
    pub fn toggle(&mut self, provider: &str) {
        if self.active.as_deref() == Some(provider) {
            self.active = None;
        } else {
            self.active = Some(provider.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
