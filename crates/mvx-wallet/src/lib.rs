/// MultiversX SDK - Ed25519 transaction signer.
///
/// Accounts on the network are Ed25519 keys: the public key is the address
/// and transactions are signed by signing their canonical JSON bytes.
/// Key generation and storage are left to the caller.

pub mod wallet;

mod error;
pub use error::WalletError;
pub use wallet::Wallet;
