//! Route-level pages.

pub mod home;
pub mod login;
pub mod signup;
