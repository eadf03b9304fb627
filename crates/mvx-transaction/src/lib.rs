/// MultiversX SDK - Transaction building, signing, hashing and serialization.
///
/// Provides the Transaction type with its canonical JSON form (the bytes
/// that get signed and submitted), its protobuf binary form (the bytes that
/// get hashed into the transaction identifier), and the seams through which
/// a signer and a network broadcaster plug in.

pub mod transaction;
pub mod serializer;
pub mod proto;
pub mod network_config;
pub mod signer;

mod error;
pub use error::TransactionError;
pub use network_config::NetworkConfig;
pub use serializer::CanonicalTransaction;
pub use signer::{Broadcaster, Signer};
pub use transaction::{Transaction, VERSION};
