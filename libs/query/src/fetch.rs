use std::{fmt, marker::PhantomData};

use serde::Serialize;
use tracing::error;

use crate::{documents::Query, Client, QueryError};

/// What a screen knows about its query at any moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchState<T> {
    Loading,
    /// Every failure collapses here with the raw message.
    Error { message: String },
    Success { data: T },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> From<Result<T, QueryError>> for FetchState<T> {
    fn from(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(data) => FetchState::Success { data },
            Err(e) => {
                error!(task = "fetch", err = e.to_string());
                FetchState::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl<T> FetchState<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Error { message } => FetchState::Error { message },
            FetchState::Success { data } => FetchState::Success { data: f(data) },
        }
    }

    /// Picks the loader, the error display or the renderer.
    pub fn render<R>(
        self,
        loading: impl FnOnce() -> R,
        error: impl FnOnce(String) -> R,
        success: impl FnOnce(T) -> R,
    ) -> R {
        match self {
            FetchState::Loading => loading(),
            FetchState::Error { message } => error(message),
            FetchState::Success { data } => success(data),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success { data } => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// One query bound to the variables a screen derived from its route.
///
/// Cloning the handle is how the refetch capability is passed to children.
pub struct QueryHandle<Q: Query> {
    client: Client,
    variables: Q::Variables,
    _query: PhantomData<fn() -> Q>,
}

impl<Q: Query> QueryHandle<Q> {
    pub fn new(client: Client, variables: Q::Variables) -> Self {
        Self {
            client,
            variables,
            _query: PhantomData,
        }
    }

    pub fn variables(&self) -> &Q::Variables {
        &self.variables
    }

    pub async fn fetch(&self) -> FetchState<Q::Response> {
        self.client.fetch::<Q>(&self.variables).await.into()
    }

    /// Re-issues the same query with the same variables.
    pub async fn refetch(&self) -> FetchState<Q::Response> {
        self.client.refetch::<Q>(&self.variables).await.into()
    }
}

impl<Q: Query> Clone for QueryHandle<Q> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            variables: self.variables.clone(),
            _query: PhantomData,
        }
    }
}

impl<Q: Query> fmt::Debug for QueryHandle<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryHandle")
            .field("query", &Q::NAME)
            .field("variables", &self.variables)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::{
        documents::{PostById, PostVariables},
        Config,
    };

    #[test]
    fn test_error_collapses_to_raw_message() {
        // Arrange
        let result: Result<(), QueryError> = Err(QueryError::GraphQl {
            message: "permission denied".to_string(),
        });

        // Act
        let state = FetchState::from(result);

        // Assert
        assert_eq!(
            state,
            FetchState::Error {
                message: "permission denied".to_string()
            }
        );
    }

    #[test]
    fn test_render_picks_branch() {
        let render = |state: FetchState<u8>| {
            state.render(
                || "loader".to_string(),
                |message| format!("error: {message}"),
                |data| format!("data: {data}"),
            )
        };

        assert_eq!(render(FetchState::default()), "loader");
        assert_eq!(
            render(FetchState::Error {
                message: "boom".to_string()
            }),
            "error: boom"
        );
        assert_eq!(render(FetchState::Success { data: 7 }), "data: 7");
    }

    #[test]
    fn test_serialize_state() {
        let loading = serde_json::to_value(FetchState::<u8>::Loading).unwrap();
        let success =
            serde_json::to_value(FetchState::Success { data: 1 }).unwrap();

        assert_eq!(loading, json!({"state": "loading"}));
        assert_eq!(success, json!({"state": "success", "data": 1}));
    }

    #[tokio::test]
    async fn test_handle_refetch_reissues_same_variables() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(wiremock::matchers::body_partial_json(
                json!({"variables": {"id": 9}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"posts": [{"id": 9}]}
            })))
            .expect(2)
            .mount(&server)
            .await;
        let client = Client::new(&Config::new(server.uri())).unwrap();
        let handle =
            QueryHandle::<PostById>::new(client, PostVariables { id: 9 });

        // Act
        let fetched = handle.fetch().await;
        let forwarded = handle.clone();
        let refetched = forwarded.refetch().await;

        // Assert
        let posts = fetched.data().and_then(|r| r.posts.as_ref());
        assert_eq!(posts.map(Vec::len), Some(1));
        assert!(refetched.data().is_some());
        assert_eq!(forwarded.variables(), &PostVariables { id: 9 });
    }
}
