//! Career Guidance Backend
//!
//! Recommends the best-matching career for a student's interest, skill and
//! academic score:
//! - Seeded career catalog in SQLite
//! - Deterministic weighted match engine
//! - Append-only submission history
//! - JSON API and HTML result card

pub mod api;
pub mod config;
pub mod guidance;

pub use api::*;
pub use config::*;
pub use guidance::*;
