//! Typed failures and classification of opaque Notion errors.

use thiserror::Error;

const DEFAULT_AUTH_MESSAGE: &str = "Invalid NOTION_TOKEN or integration not authorized";

/// A failure the caller can act on.
///
/// Each variant carries only a human-readable message; there is no retry
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InboxError {
    /// The token is invalid, revoked or not authorized.
    #[error("{0}")]
    Auth(String),

    /// The database or page does not exist or is not shared with the integration.
    #[error("{resource} not found or not shared with integration")]
    NotFound { resource: String },

    /// The integration lacks a capability on the resource.
    #[error("Integration does not have permission to access {resource}")]
    Permission { resource: String },
}

impl InboxError {
    pub fn auth() -> Self {
        InboxError::Auth(DEFAULT_AUTH_MESSAGE.to_string())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        InboxError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn permission(resource: impl Into<String>) -> Self {
        InboxError::Permission {
            resource: resource.into(),
        }
    }
}

/// An unclassified failure talking to the Notion API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{code} (HTTP {status}): {message}")]
    Response {
        status: u16,
        code: String,
        message: String,
    },

    /// The request never got a response.
    ///
    /// Stored without its URL: block ids in the path must not leak into the
    /// text `classify` matches against.
    #[error("request to Notion failed: {0}")]
    Transport(reqwest::Error),

    /// The response body was not what the API documents.
    #[error("invalid response from Notion: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a response error, humanizing the machine error code
    /// (`object_not_found` becomes `Object not found`).
    pub fn response(status: u16, code: &str, message: impl Into<String>) -> Self {
        ApiError::Response {
            status,
            code: humanize_code(code),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.without_url())
    }
}

fn humanize_code(code: &str) -> String {
    let spaced = code.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Failure of a gateway operation: either typed, or the original API error
/// untouched.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Inbox(#[from] InboxError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Maps an API error to a typed error by message signature.
///
/// Signatures are checked in priority order: `Object not found`, then
/// `Unauthorized` or `401`, then `missing permission` (any case). An error
/// matching none of them is returned unchanged as `GatewayError::Api`.
pub fn classify(err: ApiError, resource: &str) -> GatewayError {
    let message = err.to_string();

    if message.contains("Object not found") {
        return InboxError::not_found(resource).into();
    }
    if message.contains("Unauthorized") || message.contains("401") {
        return InboxError::auth().into();
    }
    if message.to_lowercase().contains("missing permission") {
        return InboxError::permission(resource).into();
    }

    GatewayError::Api(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(err: GatewayError) -> InboxError {
        match err {
            GatewayError::Inbox(inner) => inner,
            GatewayError::Api(api) => panic!("expected typed error, got {api:?}"),
        }
    }

    #[test]
    fn humanizes_codes() {
        assert_eq!(humanize_code("object_not_found"), "Object not found");
        assert_eq!(humanize_code("unauthorized"), "Unauthorized");
        assert_eq!(humanize_code(""), "");
    }

    #[test]
    fn object_not_found_is_not_found() {
        let err = ApiError::response(404, "object_not_found", "Could not find database");
        assert_eq!(typed(classify(err, "Database")), InboxError::not_found("Database"));
    }

    #[test]
    fn unauthorized_is_auth() {
        let err = ApiError::response(401, "unauthorized", "API token is invalid.");
        assert_eq!(typed(classify(err, "Database")), InboxError::auth());
    }

    #[test]
    fn bare_401_is_auth() {
        let err = ApiError::Decode("upstream said 401".to_string());
        assert_eq!(typed(classify(err, "Database")), InboxError::auth());
    }

    #[test]
    fn missing_permission_is_case_insensitive() {
        let err = ApiError::response(403, "restricted_resource", "Missing Permission: insert");
        assert_eq!(
            typed(classify(err, "Daily rollup page")),
            InboxError::permission("Daily rollup page")
        );
    }

    #[test]
    fn not_found_wins_over_auth() {
        let err = ApiError::Decode("Object not found after 401".to_string());
        assert_eq!(typed(classify(err, "Database")), InboxError::not_found("Database"));
    }

    #[test]
    fn unknown_error_is_returned_unchanged() {
        let err = ApiError::response(500, "internal_server_error", "Something broke");
        match classify(err, "Database") {
            GatewayError::Api(ApiError::Response {
                status,
                code,
                message,
            }) => {
                assert_eq!(status, 500);
                assert_eq!(code, "Internal server error");
                assert_eq!(message, "Something broke");
            }
            other => panic!("expected original error, got {other:?}"),
        }
    }

    #[test]
    fn transport_error_ignores_ids_in_url() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::blocking::get(format!("http://{addr}/blocks/9f2a4015c3e84b1d/children"))
            .unwrap_err();
        assert!(err.url().is_some());

        match classify(ApiError::from(err), "Daily rollup page") {
            GatewayError::Api(ApiError::Transport(inner)) => {
                assert!(inner.url().is_none());
                assert!(!inner.to_string().contains("9f2a4015"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn typed_messages() {
        assert_eq!(
            InboxError::auth().to_string(),
            "Invalid NOTION_TOKEN or integration not authorized"
        );
        assert_eq!(
            InboxError::not_found("Database").to_string(),
            "Database not found or not shared with integration"
        );
        assert_eq!(
            InboxError::permission("Daily rollup page").to_string(),
            "Integration does not have permission to access Daily rollup page"
        );
    }
}
