//! REST client layer: request pipeline, error taxonomy, wire types, and
//! typed endpoint wrappers.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
