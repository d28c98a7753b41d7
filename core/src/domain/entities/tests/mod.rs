//! Unit tests for domain entities

mod account_tests;
mod token_tests;
