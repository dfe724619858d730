//! Guidance Module - core of the Career Guidance service
//!
//! Architecture:
//! - Store: SQLite catalog and append-only history, passed explicitly
//! - Catalog: one-time seeding of the reference careers
//! - Matcher: pure weighted scoring over the catalog
//! - History: recording of completed submissions
//! - Render: explanation text and HTML result card
//! - Service: the validate → match → persist → render pipeline

pub mod catalog;
pub mod error;
pub mod history;
pub mod matcher;
pub mod render;
pub mod service;
pub mod store;
pub mod types;

pub use catalog::*;
pub use error::*;
pub use history::*;
pub use matcher::*;
pub use render::*;
pub use service::*;
pub use store::*;
pub use types::*;
