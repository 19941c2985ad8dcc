//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so endpoint methods stay focused on request
//! construction and response mapping.

use crate::error::ClientError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **401** → [`ClientError::Unauthorized`]
/// - **403** → [`ClientError::Forbidden`]
/// - **other non-success** → [`ClientError::Api`] with status and body
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(ClientError::Forbidden);
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_no_content_is_success() {
        let resp = mock_response(204, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401, "")).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn check_response_forbidden() {
        let err = check_response(mock_response(403, "")).await.unwrap_err();
        assert!(matches!(err, ClientError::Forbidden));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let err = check_response(mock_response(500, "boom")).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
