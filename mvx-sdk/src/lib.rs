#![deny(missing_docs)]

//! MultiversX SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use mvx_primitives as primitives;
pub use mvx_proxy as proxy;
pub use mvx_transaction as transaction;
pub use mvx_wallet as wallet;
