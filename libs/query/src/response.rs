use crate::QueryError;

type Response<T> = Result<T, QueryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, reqwest::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| QueryError::ReqwestError {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, serde_json::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| QueryError::SerdeJsonError {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T>
    for Result<T, reqwest::header::InvalidHeaderValue>
{
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| QueryError::InvalidHeaderValue {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Option<T> {
    fn into_response(self, message: &str) -> Response<T> {
        self.ok_or_else(|| QueryError::Option {
            message: message.to_string(),
        })
    }
}
