use thiserror::Error;

/// Errors that can occur when loading the forecast list.
///
/// All three kinds end up as one user-visible string via `Display`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FetchError {
    /// The server answered with a non-2xx status. The body is not read.
    #[error("HTTP error! status: {0}")]
    Request(u16),

    /// The body could not be decoded as a list of forecast entries.
    #[error("Не удалось разобрать ответ: {0}")]
    Parse(String),

    /// The request never got a response (DNS, refused connection, bad URL).
    #[error("Ошибка загрузки данных: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Request(status.as_u16()),
            None if e.is_decode() => FetchError::Parse(e.to_string()),
            None => FetchError::Network(e.to_string()),
        }
    }
}
