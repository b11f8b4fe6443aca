//! Networking modules for the migration REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues one HTTP call per backend operation, `types` defines the JSON
//! schema, `error` collapses failures into a displayable message, and `config`
//! resolves the base URL every path is joined onto.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
