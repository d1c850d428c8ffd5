//! Repository interfaces abstracting the credential store.

pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
