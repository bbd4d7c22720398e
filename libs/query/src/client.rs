use moka::future::Cache;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::{documents::Query, response::IntoResponse, Config, QueryError};

/// GraphQL client with a read-only result cache keyed by operation and
/// variables. Entries expire after the configured TTL and the cache never
/// holds more than the configured capacity.
#[derive(Clone, Debug)]
pub struct Client {
    endpoint: String,
    client: reqwest::Client,
    cache: Cache<String, Value>,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, QueryError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            "Content-Type",
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "User-Agent",
            HeaderValue::from_str(&config.user_agent)
                .into_response("failed to build user agent header")?,
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .into_response("failed to build http client")?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
            cache: Cache::builder()
                .max_capacity(config.cache_capacity)
                .time_to_live(config.cache_ttl)
                .build(),
        })
    }

    /// Cache-first fetch.
    pub async fn fetch<Q: Query>(
        &self,
        variables: &Q::Variables,
    ) -> Result<Q::Response, QueryError> {
        let key = cache_key::<Q>(variables)?;

        if let Some(data) = self.cache.get(&key).await {
            return serde_json::from_value(data)
                .into_response("failed to decode cached data");
        }

        self.refetch::<Q>(variables).await
    }

    /// Always hits the network and replaces the cached entry.
    pub async fn refetch<Q: Query>(
        &self,
        variables: &Q::Variables,
    ) -> Result<Q::Response, QueryError> {
        let key = cache_key::<Q>(variables)?;

        let data = self.execute::<Q>(variables).await?;
        let response = serde_json::from_value::<Q::Response>(data.clone())
            .into_response("failed to decode data")?;

        self.cache.insert(key, data).await;

        Ok(response)
    }

    #[tracing::instrument(skip(self), fields(operation = Q::NAME))]
    async fn execute<Q: Query>(
        &self,
        variables: &Q::Variables,
    ) -> Result<Value, QueryError> {
        let body = serde_json::to_string(&GraphQlRequest {
            query: Q::DOCUMENT,
            operation_name: Q::NAME,
            variables,
        })
        .into_response("failed to encode request")?;

        let response = self
            .client
            .post(&self.endpoint)
            .body(body)
            .send()
            .await
            .into_response("failed to send")?;

        let status = response.status();
        let text = response.text().await.into_response("failed to get text")?;

        if !status.is_success() {
            error!(task = "execute", status = status.as_u16(), err = text);
            return Err(QueryError::FailedStatusCode {
                status_code: status,
                message: text,
            });
        }

        let response = serde_json::from_str::<GraphQlResponse>(&text)
            .into_response("failed to parse response")?;

        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            error!(task = "execute", err = message);
            return Err(QueryError::GraphQl { message });
        }

        info!(task = "execute", status = status.as_u16());

        response
            .data
            .filter(|data| !data.is_null())
            .into_response("response carried no data")
    }
}

fn cache_key<Q: Query>(variables: &Q::Variables) -> Result<String, QueryError> {
    let variables = serde_json::to_string(variables)
        .into_response("failed to encode variables")?;

    Ok(format!("{}:{}", Q::NAME, variables))
}
