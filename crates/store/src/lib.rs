use async_trait::async_trait;
use model::{Error, Pokemon};

/// Persist captured pokemon.
///
/// A store writes each record into a single collection, keyed by the record id.
/// Nothing is read back through this trait.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Name of the collection records are written into.
    fn collection(&self) -> &str;

    async fn put_pokemon(&self, pokemon: &Pokemon) -> Result<(), StoreError>;
}

/// Errors arising from writing a record.
#[derive(Debug, thiserror::Error)]
#[error("failed to put record [{record_id}] into [{collection}]: {reason}")]
pub struct StoreError {
    pub collection: String,
    pub record_id: String,

    pub reason: StoreErrorReason,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreErrorReason {
    // The record couldn't be converted into the store's item format
    #[error("bad record: {0}")]
    BadRecord(String),
    // The store couldn't be reached at all
    #[error("store unavailable: {0}")]
    Unavailable(Error),
    // The store was reached but failed or refused the write
    #[error("write rejected: {0}")]
    WriteRejected(Error),
}

impl StoreError {
    pub fn new(collection: &str, pokemon: &Pokemon, reason: StoreErrorReason) -> Self {
        StoreError {
            collection: collection.to_string(),
            record_id: pokemon.id.clone(),
            reason,
        }
    }

    /// True when the write never reached the store.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.reason, StoreErrorReason::Unavailable(_))
    }
}
