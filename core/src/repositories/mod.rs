//! Repository interfaces for durable state, with in-memory implementations.

pub mod account;
pub mod device;
pub mod token;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use device::{DeviceRepository, InMemoryDeviceRepository};
pub use token::{InMemoryTokenRepository, TokenRepository};
