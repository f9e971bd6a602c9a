//! Users domain module: a fixed, read-only directory.

pub mod user;

pub use user::{User, UserDirectory, UserStatus};
