use eats_picker::PickerError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("restaurant '{0}' is not in the catalog")]
    UnknownRestaurant(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("email or password is incorrect")]
    InvalidCredentials,

    #[error("no user is logged in")]
    NotAuthenticated,

    #[error(transparent)]
    Picker(#[from] PickerError),
}
