//! Networking and wire-format modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the boundary to the job-board backend, `token` decodes the
//! bearer credential it issues, `types` defines the shared wire schema, and
//! `error` classifies every way a backend call can fail.

pub mod api;
pub mod error;
pub mod token;
pub mod types;
