//! Response formats: how a response body becomes the caller's result.
//!
//! The caller picks a format as a type parameter, which replaces any runtime
//! inspection of the result type. `Text` never parses JSON, so a plain-text
//! endpoint works even when its payload is not valid JSON.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decodes a fully read response body into `Self::Output`.
pub trait ResponseFormat {
    type Output;

    /// Short name used in log fields.
    const NAME: &'static str;

    fn decode(body: Vec<u8>) -> Result<Self::Output, ApiError>;
}

/// Parse the body as JSON into `T`.
#[derive(Debug)]
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> ResponseFormat for Json<T> {
    type Output = T;
    const NAME: &'static str = "json";

    fn decode(body: Vec<u8>) -> Result<T, ApiError> {
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Return the body as text without inspecting it.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing.
#[derive(Debug)]
pub struct Text;

impl ResponseFormat for Text {
    type Output = String;
    const NAME: &'static str = "text";

    fn decode(body: Vec<u8>) -> Result<String, ApiError> {
        Ok(match String::from_utf8(body) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

/// Return the body bytes untouched.
#[derive(Debug)]
pub struct Raw;

impl ResponseFormat for Raw {
    type Output = Vec<u8>;
    const NAME: &'static str = "raw";

    fn decode(body: Vec<u8>) -> Result<Vec<u8>, ApiError> {
        Ok(body)
    }
}

/// Read the body and drop it. Useful for `204 No Content` endpoints, where
/// `Json<()>` would fail on the empty payload.
#[derive(Debug)]
pub struct Discard;

impl ResponseFormat for Discard {
    type Output = ();
    const NAME: &'static str = "discard";

    fn decode(_body: Vec<u8>) -> Result<(), ApiError> {
        Ok(())
    }
}
