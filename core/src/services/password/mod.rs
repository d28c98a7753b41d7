//! Credential hashing and password policy
//!
//! - [`PasswordHasher`] - the hashing seam used by the account write path
//! - [`BcryptPasswordHasher`] - bcrypt implementation with configurable cost
//! - [`validate_password_policy`] - strength rules applied before hashing

mod hasher;

pub use hasher::{validate_password_policy, BcryptPasswordHasher, PasswordHasher};
