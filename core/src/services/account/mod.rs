//! Account write path
//!
//! Every plaintext credential passes through [`AccountService`] on its way to
//! storage. Repositories only ever see hashes.

mod service;

#[cfg(test)]
mod tests;

pub use service::AccountService;
