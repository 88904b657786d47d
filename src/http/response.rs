//! HTTP response building module
//!
//! Maps negotiation and upload outcomes onto hyper responses.

use crate::error::{RepresentationError, UploadError};
use crate::logger;
use crate::representation::RepresentationTriple;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};

/// Build 406 Not Acceptable response
pub fn build_406_response(err: &RepresentationError) -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_ACCEPTABLE, err.to_string())
}

/// Build the rejection for an upload
///
/// Unsupported formats get 415, content that fails validation gets 400.
pub fn build_upload_error_response(err: &UploadError) -> Response<Full<Bytes>> {
    let status = match err {
        UploadError::UnsupportedExtension { .. } | UploadError::UnsupportedContentType(_) => {
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        }
        UploadError::InvalidContent(_) => StatusCode::BAD_REQUEST,
    };
    build_text_response(status, err.to_string())
}

/// Build 200 response for a stored representation
///
/// `Content-Language` is only set when the triple carries a language.
pub fn build_representation_response(
    data: Bytes,
    triple: &RepresentationTriple,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, triple.content_type.as_str())
        .header(CONTENT_LENGTH, content_length);

    if !triple.content_language.is_empty() {
        builder = builder.header(CONTENT_LANGUAGE, triple.content_language.as_str());
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        logger::log_response_build_failed(StatusCode::OK, &e);
        Response::new(Full::new(Bytes::new()))
    })
}

fn build_text_response(status: StatusCode, message: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(message)))
        .unwrap_or_else(|e| {
            logger::log_response_build_failed(status, &e);
            let mut response = Response::new(Full::new(Bytes::new()));
            *response.status_mut() = status;
            response
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NegotiationError, ValidationError};
    use http_body_util::BodyExt;

    fn triple(content_type: &str, language: &str, extension: &str) -> RepresentationTriple {
        RepresentationTriple {
            content_type: content_type.to_string(),
            content_language: language.to_string(),
            extension: extension.to_string(),
        }
    }

    #[tokio::test]
    async fn test_406_body_names_accept_list() {
        let err = RepresentationError::ContentTypeNotSupported {
            accept: vec!["application/json".to_string()],
            source: NegotiationError::NoAgreeableContentType {
                preferences: vec!["application/json".to_string()],
            },
        };
        let response = build_406_response(&err);
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            body,
            Bytes::from("None of the content-types in [\"application/json\"] are supported.")
        );
    }

    #[test]
    fn test_upload_error_statuses() {
        let unsupported = UploadError::UnsupportedContentType("text/csv".to_string());
        assert_eq!(
            build_upload_error_response(&unsupported).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );

        let invalid = UploadError::InvalidContent(ValidationError::InvalidFileContent(
            "unexpected end of file".to_string(),
        ));
        assert_eq!(
            build_upload_error_response(&invalid).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_html_response_headers() {
        let response = build_representation_response(
            Bytes::from("<html/>"),
            &triple("text/html", "nb", "html"),
            false,
        );
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/html");
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "nb");
        assert_eq!(response.headers()[CONTENT_LENGTH], "7");
    }

    #[tokio::test]
    async fn test_head_response_has_no_body() {
        let response = build_representation_response(
            Bytes::from("<a> <b> <c> ."),
            &triple("text/turtle", "", "ttl"),
            true,
        );
        assert!(response.headers().get(CONTENT_LANGUAGE).is_none());
        assert_eq!(response.headers()[CONTENT_LENGTH], "13");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
