use log::debug;

/// Click-to-connect selection state
///
/// The first click picks the source, a click on a different component picks
/// the target and produces a connection request. Clicking the source again
/// does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    OneSelected(String),
}

impl Selection {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Feed a click on component `id`.
    ///
    /// Returns `Some((from, to))` when the click completes a pair; the state
    /// is back to `Idle` afterwards.
    pub fn click(&mut self, id: &str) -> Option<(String, String)> {
        match std::mem::take(self) {
            Selection::Idle => {
                debug!("Selected first component: {}", id);
                *self = Selection::OneSelected(id.to_string());
                None
            }
            Selection::OneSelected(first) if first == id => {
                *self = Selection::OneSelected(first);
                None
            }
            Selection::OneSelected(first) => {
                debug!("Selected second component: {}", id);
                Some((first, id.to_string()))
            }
        }
    }

    /// Drop any pending first endpoint
    pub fn reset(&mut self) {
        *self = Selection::Idle;
    }

    /// The pending first endpoint, if any
    pub fn pending(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::OneSelected(id) => Some(id),
        }
    }
}
