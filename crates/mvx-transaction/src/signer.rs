//! Seams through which signing and broadcasting plug into a transaction.

use std::fmt::Display;
use std::future::Future;

use crate::transaction::Transaction;
use crate::TransactionError;

/// Produces signatures over canonical transaction bytes.
///
/// The SDK does not fix the signature scheme; the signer decides.
pub trait Signer {
    /// Error reported when signing fails.
    type Error: Display;

    /// Sign `message` and return the raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

impl<S: Signer + ?Sized> Signer for &S {
    type Error = S::Error;

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, Self::Error> {
        (**self).sign(message)
    }
}

/// Submits signed transactions to the network.
pub trait Broadcaster {
    /// Error reported by the broadcaster. Must be able to carry local
    /// serialization failures that happen before anything is sent.
    type Error: From<TransactionError>;

    /// Submit a transaction and return the hash the network assigned to it.
    fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
