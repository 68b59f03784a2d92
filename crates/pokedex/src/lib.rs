use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use lambda_runtime::tracing::{Instrument, Span};
use lambda_runtime::{tracing, LambdaEvent};
use model::{CapturePokemonRequest, Error, Pokemon};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use store::RecordStore;

mod error;

pub use error::CaptureError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Captures pokemon sent through API Gateway and writes them to a `RecordStore`.
///
/// Designed for use with `lambda_runtime::run()`, the store is built once and
/// shared by every invocation.
///
/// ```ignore
/// use lambda_runtime::service_fn;
/// use pokedex::Pokedex;
/// use store_dynamodb::DynamoDbRecordStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
///     let pokedex = Pokedex::new(Arc::new(DynamoDbRecordStore::new(
///         aws_sdk_dynamodb::Client::new(&config),
///     )));
///     let pokedex: &Pokedex = &pokedex;
///
///     lambda_runtime::run(service_fn(move |event| async move { pokedex.handle(event).await })).await
/// }
/// ```
pub struct Pokedex {
    store: Arc<dyn RecordStore>,
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl Pokedex {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Pokedex { store }
    }

    /// Decode the body, stamp a new record and write it to the store.
    /// Returns exactly the record that was written.
    pub async fn capture(&self, body: Option<&str>) -> Result<Pokemon, CaptureError> {
        let body: &str =
            body.ok_or_else(|| CaptureError::MalformedInput("missing request body".to_string()))?;
        // Only objects are accepted; a repeated key keeps its last value
        let fields: Map<String, Value> = serde_json::from_str(body)?;
        let request: CapturePokemonRequest = serde_json::from_value(Value::Object(fields))?;

        let pokemon: Pokemon = Pokemon::capture(request);

        tracing::debug!(
            collection = self.store.collection(),
            id = %pokemon.id,
            "Putting record"
        );

        self.store.put_pokemon(&pokemon).await?;

        tracing::info!(id = %pokemon.id, "Captured pokemon");

        Ok(pokemon)
    }

    /// Handle an API Gateway proxy event.
    ///
    /// Every capture failure is turned into a status response. `Err` is only
    /// returned if the response body itself can't be encoded.
    pub async fn handle(
        &self,
        event: LambdaEvent<ApiGatewayProxyRequest>,
    ) -> Result<ApiGatewayProxyResponse, Error> {
        let request_id: &str = event.context.request_id.as_str();
        let capture_span: Span =
            tracing::span!(tracing::Level::INFO, "CapturePokemon", request_id);

        let result: Result<Pokemon, CaptureError> = self
            .capture(event.payload.body.as_deref())
            .instrument(capture_span)
            .await;

        match result {
            Ok(pokemon) => json_response(200, &pokemon),
            Err(err) => {
                tracing::error!(request_id, "Failed to capture pokemon: {err}");

                json_response(
                    err.status_code(),
                    &ErrorResponse {
                        message: err.to_string(),
                    },
                )
            }
        }
    }
}

fn json_response<T: Serialize>(
    status_code: i64,
    body: &T,
) -> Result<ApiGatewayProxyResponse, Error> {
    let mut headers: HeaderMap = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    Ok(ApiGatewayProxyResponse {
        status_code,
        headers,
        body: Some(Body::Text(serde_json::to_string(body)?)),
        ..Default::default()
    })
}
