//! HTTP handlers.

pub mod fallback;
pub mod root;
