//! reqwest-based answer client for the local question endpoint.

use reqwest::{Client, Response};

use crate::serde_api::{ApiAskRequest, extract_error_message, parse_answer_body};
use crate::{
    AnswerClient, AnswerError, AnswerFuture, AnswerPayload, DEFAULT_ANSWER_ENDPOINT,
};

#[derive(Debug, Clone)]
pub struct HttpAnswerClient {
    client: Client,
    endpoint: String,
}

impl HttpAnswerClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ANSWER_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn parse_error(response: Response) -> AnswerError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("answer request failed with status {status}"));

        AnswerError::status(status.as_u16(), message)
    }
}

impl AnswerClient for HttpAnswerClient {
    fn ask<'a>(&'a self, question: &'a str) -> AnswerFuture<'a, Result<AnswerPayload, AnswerError>> {
        Box::pin(async move {
            if question.trim().is_empty() {
                return Err(AnswerError::invalid_request("question must not be empty"));
            }

            let response = self
                .client
                .post(self.endpoint.as_str())
                .json(&ApiAskRequest { question })
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        AnswerError::timeout(err.to_string())
                    } else {
                        AnswerError::transport(err.to_string())
                    }
                })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            let body = response.text().await.map_err(|err| {
                if err.is_timeout() {
                    AnswerError::timeout(err.to_string())
                } else {
                    AnswerError::transport(err.to_string())
                }
            })?;

            parse_answer_body(&body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_ask_endpoint() {
        let client = HttpAnswerClient::new(Client::new());
        assert_eq!(client.endpoint(), DEFAULT_ANSWER_ENDPOINT);

        let client = client.with_endpoint("http://10.0.0.2:9000/ask/");
        assert_eq!(client.endpoint(), "http://10.0.0.2:9000/ask/");
    }

    #[tokio::test]
    async fn blank_question_fails_before_any_request() {
        let client = HttpAnswerClient::new(Client::new()).with_endpoint("http://127.0.0.1:1/ask/");
        let error = client.ask(" \n ").await.expect_err("blank is rejected");
        assert_eq!(error.kind, crate::AnswerErrorKind::InvalidRequest);
    }
}
