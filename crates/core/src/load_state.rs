//! Three-way view state for a single backend read.

/// Outcome of a view's read: still loading, failed with a message, or data.
///
/// The variants are mutually exclusive; a view never holds both an error and
/// data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request outstanding.
    Loading,
    /// Request failed; human-readable message.
    Error(String),
    /// Request succeeded.
    Data(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// Builds the state from a finished request.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(error) => Self::Error(error.to_string()),
        }
    }

    /// Whether the request is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The data, if loaded.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, if failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Maps the data, keeping loading and error states.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Error(message) => LoadState::Error(message),
            Self::Data(data) => LoadState::Data(f(data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<u32> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = LoadState::from_result(Ok::<_, String>(7));
        assert_eq!(ok.data(), Some(&7));

        let err: LoadState<u32> = LoadState::from_result(Err("boom"));
        assert_eq!(err.error(), Some("boom"));
        assert!(err.data().is_none());
    }

    #[test]
    fn test_map_keeps_error() {
        let err: LoadState<u32> = LoadState::Error("nope".into());
        assert_eq!(err.map(|n| n * 2), LoadState::Error("nope".into()));

        let ok = LoadState::Data(2).map(|n| n * 2);
        assert_eq!(ok, LoadState::Data(4));
    }
}
