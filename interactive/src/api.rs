use commentdeck_shared::{ClientConfig, Comment, User};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
}

impl ApiError {
    /// True when the request was aborted because its screen went away.
    pub fn is_abort(&self) -> bool {
        match self {
            ApiError::Transport {
                source: gloo_net::Error::JsError(err),
                ..
            } => err.name == "AbortError",
            _ => false,
        }
    }
}

/// Plain `GET`: no query string, no auth header.
async fn get<T: DeserializeOwned>(url: &str, signal: Option<&AbortSignal>) -> Result<T, ApiError> {
    tracing::debug!(%url, "fetching");
    let resp = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

    if !resp.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    resp.json().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// `GET /comments`, the full unpaginated collection.
pub async fn fetch_comments(
    config: &ClientConfig,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Comment>, ApiError> {
    get(&config.comments_url(), signal).await
}

/// `GET /users/{id}` for the configured user.
pub async fn fetch_current_user(
    config: &ClientConfig,
    signal: Option<&AbortSignal>,
) -> Result<User, ApiError> {
    get(&config.user_url(), signal).await
}
