//! bcrypt password hashing

use hrm_shared::validation::check_password_strength;

use crate::errors::{DomainError, ValidationError};

/// One-way credential hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext secret with a fresh random salt
    fn hash(&self, secret: &str) -> Result<String, DomainError>;

    /// Check a plaintext secret against a stored hash.
    ///
    /// A malformed hash is a mismatch, not an error.
    fn verify(&self, secret: &str, hashed: &str) -> bool;
}

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Lowest cost bcrypt accepts; only for tests
    pub const MIN_COST: u32 = 4;

    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(Self::MIN_COST, 31),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, secret: &str) -> Result<String, DomainError> {
        bcrypt::hash(secret, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, secret: &str, hashed: &str) -> bool {
        bcrypt::verify(secret, hashed).unwrap_or(false)
    }
}

/// Validate password strength
///
/// Requirements:
/// - At least 8 characters
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
/// - At least one of `!@#$%^&*`
pub fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    check_password_strength(password).map_err(|reason| ValidationError::WeakPassword {
        reason: reason.to_string(),
    })
}
