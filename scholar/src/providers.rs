//! Stable answer client construction surface for facade consumers.

use std::sync::Arc;

use crate::{AnswerClient, AnswerError};

/// Checks that an endpoint is an absolute `http`/`https` URL.
pub fn validate_endpoint(endpoint: &str) -> Result<(), AnswerError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(AnswerError::invalid_request(
            "answer endpoint must not be empty",
        ));
    }

    let scheme = endpoint
        .split_once("://")
        .map(|(scheme, rest)| (scheme.to_ascii_lowercase(), rest));

    match scheme {
        Some((scheme, rest)) if (scheme == "http" || scheme == "https") && !rest.is_empty() => {
            Ok(())
        }
        _ => Err(AnswerError::invalid_request(format!(
            "answer endpoint '{endpoint}' must be an http or https URL"
        ))),
    }
}

#[cfg(feature = "http-client")]
pub fn build_http_answer_client(
    endpoint: impl Into<String>,
) -> Result<Arc<dyn AnswerClient>, AnswerError> {
    let endpoint = endpoint.into();
    validate_endpoint(&endpoint)?;

    let http = reqwest::Client::builder()
        .build()
        .map_err(|err| AnswerError::transport(err.to_string()))?;

    Ok(Arc::new(
        sprovider::HttpAnswerClient::new(http).with_endpoint(endpoint.trim()),
    ))
}

#[cfg(not(feature = "http-client"))]
pub fn build_http_answer_client(
    endpoint: impl Into<String>,
) -> Result<Arc<dyn AnswerClient>, AnswerError> {
    validate_endpoint(&endpoint.into())?;
    Err(AnswerError::invalid_request(
        "http-client feature is not enabled on scholar",
    ))
}
