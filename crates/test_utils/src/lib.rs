use async_trait::async_trait;
use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
use aws_smithy_mocks::{mock, mock_client, Rule};
use lambda_runtime::{Context, LambdaEvent};
use model::{CapturePokemonRequest, Pokemon};
use std::sync::atomic::{AtomicUsize, Ordering};
use store::StoreErrorReason::{Unavailable, WriteRejected};
use store::{RecordStore, StoreError};

/// Request body used across tests
pub const PIKACHU_BODY: &str = r#"{"title":"Pikachu","description":"Electric mouse"}"#;

/// Create a dummy API Gateway event with a set body
pub fn api_gateway_event_with_body(body: Option<&str>) -> LambdaEvent<ApiGatewayProxyRequest> {
    let request: ApiGatewayProxyRequest = ApiGatewayProxyRequest {
        body: body.map(str::to_string),
        ..Default::default()
    };

    LambdaEvent::new(request, Context::default())
}

/// A freshly captured pokemon with both fields set
pub fn pikachu() -> Pokemon {
    Pokemon::capture(CapturePokemonRequest {
        title: Some("Pikachu".to_string()),
        description: Some("Electric mouse".to_string()),
    })
}

/// A default mock DynamoDB client which accepts every put
pub fn create_mock_dynamodb_client() -> aws_sdk_dynamodb::Client {
    let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build();

    mock_client!(aws_sdk_dynamodb, [&put_item_rule])
}

/// A store whose writes always fail, counting how many were attempted.
#[derive(Default)]
pub struct FailingRecordStore {
    unavailable: bool,
    attempts: AtomicUsize,
}

impl FailingRecordStore {
    /// Fails as if the store could not be reached
    pub fn unavailable() -> Self {
        FailingRecordStore {
            unavailable: true,
            attempts: AtomicUsize::new(0),
        }
    }

    /// Fails as if the store refused the write
    pub fn rejecting() -> Self {
        FailingRecordStore::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for FailingRecordStore {
    fn collection(&self) -> &str {
        "Pokemon"
    }

    async fn put_pokemon(&self, pokemon: &Pokemon) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        let reason = if self.unavailable {
            Unavailable("connection refused".into())
        } else {
            WriteRejected("access denied".into())
        };

        Err(StoreError::new(self.collection(), pokemon, reason))
    }
}
