use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, tracing};
use model::Error;
use pokedex::Pokedex;
use std::sync::Arc;
use store_dynamodb::DynamoDbRecordStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Built once on cold start and reused by every invocation
    let dynamodb_client: aws_sdk_dynamodb::Client =
        aws_sdk_dynamodb::Client::new(&aws_config::load_defaults(BehaviorVersion::latest()).await);

    let pokedex: Pokedex = Pokedex::new(Arc::new(DynamoDbRecordStore::new(dynamodb_client)));
    let pokedex: &Pokedex = &pokedex;

    lambda_runtime::run(service_fn(move |event| async move {
        pokedex.handle(event).await
    }))
    .await
}
