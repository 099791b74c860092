//! Client-side session state.
//!
//! DESIGN
//! ======
//! `session` owns the only writable identity state, `error_surface` holds
//! the last login/signup failure, and `context` derives the read-only view
//! the UI tree consumes.

pub mod context;
pub mod error_surface;
pub mod session;
