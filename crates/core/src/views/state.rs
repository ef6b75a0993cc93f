/// Text shown while a view waits for its first response.
pub const LOADING_TEXT: &str = "Loading...";

/// What a data-backed view currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Ready(T),
    /// One human-readable message shown in place of the content.
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The loading or error text that replaces the content, if any.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ViewState::Loading => Some(LOADING_TEXT),
            ViewState::Failed(message) => Some(message),
            ViewState::Ready(_) => None,
        }
    }
}
