use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// JSON body extractor that never rejects.
///
/// Empty, unreadable, or mis-shaped bodies become `T::default()`; the
/// endpoints substitute defaults instead of answering 4xx.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Unreadable request body, using defaults: {e}");
                return Ok(LenientJson(T::default()));
            }
        };

        Ok(LenientJson(parse_or_default(&bytes)))
    }
}

fn parse_or_default<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("Malformed JSON body, using defaults: {e}");
            return T::default();
        }
    };
    // Only named fields count; arrays would otherwise fill fields by position.
    if !value.is_object() {
        warn!("JSON body is not an object, using defaults");
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("Mis-shaped JSON body, using defaults: {e}");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SubmitRequest;

    #[test]
    fn test_empty_body_is_default() {
        let req: SubmitRequest = parse_or_default(b"  ");
        assert!(req.role.is_null());
        assert_eq!(req.answers_count(), 0);
    }

    #[test]
    fn test_garbage_body_is_default() {
        let req: SubmitRequest = parse_or_default(b"{not json");
        assert_eq!(req.answers_count(), 0);
    }

    #[test]
    fn test_wrong_shape_is_default() {
        let req: SubmitRequest = parse_or_default(b"[1, 2, 3]");
        assert!(req.session_id.is_null());
    }

    #[test]
    fn test_array_body_does_not_fill_fields_by_position() {
        let req: SubmitRequest = parse_or_default(br#"["s-9", "software-engineer", ["a", "b"]]"#);
        assert!(req.session_id.is_null());
        assert!(req.role.is_null());
        assert_eq!(req.answers_count(), 0);
    }

    #[test]
    fn test_scalar_body_is_default() {
        let req: SubmitRequest = parse_or_default(b"\"software-engineer\"");
        assert!(req.role.is_null());
    }

    #[test]
    fn test_valid_body_parses() {
        let req: SubmitRequest = parse_or_default(br#"{"role":"devops-engineer","answers":["x","y"]}"#);
        assert_eq!(req.role_id(), "devops-engineer");
        assert_eq!(req.answers_count(), 2);
    }
}
