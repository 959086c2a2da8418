//! Response format negotiation over the `Accept` header.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

/// The representation a client asked for.
///
/// JSON is the default, including for `*/*` and absent headers; a request
/// naming only formats the service cannot produce is rejected with 406.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Resolves the first producible format in an `Accept` header value.
    fn from_accept(accept: &str) -> Option<Self> {
        for entry in accept.split(',') {
            let media_type = entry
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();

            match media_type.as_str() {
                "" | "*/*" | "application/json" | "application/*" => return Some(Self::Json),
                "application/xml" | "text/xml" => return Some(Self::Xml),
                _ => {}
            }
        }
        None
    }
}

/// Rejection for unacceptable requested formats.
#[derive(Debug)]
pub struct NotAcceptable;

impl IntoResponse for NotAcceptable {
    fn into_response(self) -> Response {
        StatusCode::NOT_ACCEPTABLE.into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = NotAcceptable;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(header::ACCEPT) {
            None => Ok(Self::Json),
            Some(value) => {
                let accept = value.to_str().map_err(|_| NotAcceptable)?;
                Self::from_accept(accept).ok_or(NotAcceptable)
            }
        }
    }
}
