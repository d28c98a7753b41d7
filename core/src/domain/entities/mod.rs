//! Domain entities representing core business objects.

pub mod account;
pub mod device;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{Account, AccountProfile, NewAccount, Role};
pub use device::{Device, DevicePlatform};
pub use token::{
    Claims, IssuedToken, SessionTokens, TokenKind, TokenRecord,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS, VERIFICATION_TOKEN_EXPIRY_MINUTES,
    JWT_ISSUER, JWT_AUDIENCE,
};
