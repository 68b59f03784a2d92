use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use model::Pokemon;
use std::collections::HashMap;
use store::StoreErrorReason::{BadRecord, Unavailable, WriteRejected};
use store::{RecordStore, StoreError, StoreErrorReason};

/// Table every captured pokemon is written into.
pub const POKEMON_TABLE_NAME: &str = "Pokemon";

/// Writes records to the `Pokemon` table, keyed by the `id` attribute.
///
/// The client is cheap to clone and is expected to be built once per process
/// and reused across invocations.
#[derive(Clone)]
pub struct DynamoDbRecordStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoDbRecordStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client) -> Self {
        DynamoDbRecordStore {
            table_name: POKEMON_TABLE_NAME.to_string(),
            dynamodb_client,
        }
    }

    async fn put_item(
        &self,
        item: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    fn collection(&self) -> &str {
        &self.table_name
    }

    async fn put_pokemon(&self, pokemon: &Pokemon) -> Result<(), StoreError> {
        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(pokemon)
            .map_err(|err| StoreError::new(&self.table_name, pokemon, BadRecord(err.to_string())))?;

        self.put_item(item)
            .await
            .map_err(|err| StoreError::new(&self.table_name, pokemon, classify(err)))?;

        Ok(())
    }
}

/// Failures where the request never got an answer from DynamoDB are `Unavailable`,
/// everything else is a rejected write.
fn classify(err: SdkError<PutItemError, HttpResponse>) -> StoreErrorReason {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Unavailable(err.into()),
        _ => WriteRejected(err.into()),
    }
}
