//! Static content tables for the site.
//!
//! Everything here is compiled in and borrowed for `'static`; pages and the
//! estimator read straight from these slices.

pub mod company;
pub mod plans;
pub mod projects;
pub mod services;

pub use company::*;
pub use plans::*;
pub use projects::*;
pub use services::*;

/// Label of the pseudo category/type that matches every entry.
pub const ALL: &str = "Tous";
