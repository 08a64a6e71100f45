//! Candidate-pool selection for the spin, explore, and map views.
//!
//! [`build_pool`] combines the catalog, the user's [`ListState`], and the
//! active filter criteria into the restaurants a view may show.
//! [`select_random`] then picks one uniformly for the wheel.

pub mod error;
pub mod lists;
pub mod pool;
pub mod selector;

pub use error::PickerError;
pub use lists::{ListKind, ListState};
pub use pool::{build_pool, is_candidate, PoolMode};
pub use selector::{select_random, RandomSource, RngSource, SequenceSource};
