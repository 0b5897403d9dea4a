//! Domain types and validation for the creatorhub backend.
//!
//! Pure logic only: the write-side models with their validation rules, the
//! lenient read-side projections, and the built-in seed catalog. Persistence
//! lives in `creatorhub-db`, HTTP in `creatorhub-api`.

pub mod catalog;
pub mod creator;
pub mod doc;
pub mod error;
pub mod segment;
