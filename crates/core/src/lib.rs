//! Core domain logic for the headsmith project.
//!
//! This crate holds everything that does not depend on the HTTP layer:
//! the SEO record type, the head-fragment renderer, the advisory validator,
//! the aggregator that bundles them, and the storage trait that concrete
//! backends implement in the server crate.

pub mod seo;
pub mod storage;
