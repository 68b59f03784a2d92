use store::StoreError;

/// Reasons a capture can fail. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The body was missing or not a JSON object with string fields.
    /// Nothing is written in this case.
    #[error("malformed request body: {0}")]
    MalformedInput(String),
    /// The store could not be reached.
    #[error(transparent)]
    StoreUnavailable(StoreError),
    /// The store was reached but the write failed.
    #[error(transparent)]
    StoreWriteError(StoreError),
}

impl CaptureError {
    /// HTTP status reported to API Gateway for this failure.
    pub fn status_code(&self) -> i64 {
        match self {
            CaptureError::MalformedInput(_) => 400,
            CaptureError::StoreUnavailable(_) => 503,
            CaptureError::StoreWriteError(_) => 500,
        }
    }
}

impl From<StoreError> for CaptureError {
    fn from(err: StoreError) -> Self {
        if err.is_unavailable() {
            CaptureError::StoreUnavailable(err)
        } else {
            CaptureError::StoreWriteError(err)
        }
    }
}

impl From<serde_json::Error> for CaptureError {
    fn from(err: serde_json::Error) -> Self {
        CaptureError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{CapturePokemonRequest, Pokemon};
    use store::StoreErrorReason;

    fn store_error(reason: StoreErrorReason) -> StoreError {
        let pokemon: Pokemon = Pokemon::capture(CapturePokemonRequest::default());

        StoreError::new("Pokemon", &pokemon, reason)
    }

    #[test]
    fn bad_record_is_a_write_error() {
        let err: CaptureError =
            store_error(StoreErrorReason::BadRecord("unsupported value".to_string())).into();

        assert!(matches!(err, CaptureError::StoreWriteError(_)));
        assert_eq!(500, err.status_code());
        assert!(err.to_string().contains("bad record: unsupported value"));
    }

    #[test]
    fn unavailable_store_is_reported_as_unavailable() {
        let err: CaptureError =
            store_error(StoreErrorReason::Unavailable("connection refused".into())).into();

        assert!(matches!(err, CaptureError::StoreUnavailable(_)));
        assert_eq!(503, err.status_code());
    }

    #[test]
    fn malformed_input_is_a_bad_request() {
        let err: CaptureError = serde_json::from_str::<serde_json::Value>("{")
            .map_err(CaptureError::from)
            .expect_err("Truncated JSON should not parse");

        assert!(matches!(err, CaptureError::MalformedInput(_)));
        assert_eq!(400, err.status_code());
    }
}
