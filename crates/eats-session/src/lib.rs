//! Session-scoped application state.
//!
//! A [`Session`] is the explicit state container handed to every view: the
//! shared read-only catalog, the user's curation lists, and the mock
//! authentication service.

pub mod auth;
pub mod error;
pub mod profile;
pub mod session;

pub use auth::{AuthService, RegisterForm, MIN_PASSWORD_LEN};
pub use error::SessionError;
pub use profile::{Avatar, FriendRecommendation, ProfileUpdate, UserProfile};
pub use session::{PoolStats, Session};
