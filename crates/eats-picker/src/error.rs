use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    /// The candidate pool had no restaurants to choose from.
    #[error("candidate pool is empty")]
    EmptyPool,

    #[error("unknown pool mode '{0}'; expected all, favorites, or wheel-list")]
    InvalidMode(String),

    #[error("unknown list '{0}'; expected favorites, blacklist, or wheel-list")]
    InvalidListKind(String),
}
