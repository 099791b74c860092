//! Browser glue helpers.

pub mod credential_store;
