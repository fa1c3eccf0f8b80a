//! Profile search.
//!
//! Narrows a profile collection by optional skill, location and free-text
//! criteria. All criteria are combined with logical AND.

pub mod filter;
pub mod model;

pub use filter::search_profiles;
pub use model::ProfileFilters;
