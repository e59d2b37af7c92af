use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::PaginationError;

const CURSOR_VERSION: u8 = 1;

/// Last-seen sort position of a listing: a nullable primary value plus a unique tie-break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysetPosition<P, T> {
    pub primary: Option<P>,
    pub tie_break: T,
}

impl<P, T> KeysetPosition<P, T> {
    pub fn new(primary: Option<P>, tie_break: T) -> Self {
        Self { primary, tie_break }
    }
}

#[derive(Serialize)]
struct EncodedRef<'a, P, T> {
    v: u8,
    p: &'a Option<P>,
    t: &'a T,
}

#[derive(Deserialize)]
struct Encoded<P, T> {
    v: u8,
    p: Option<P>,
    t: T,
}

pub fn encode<P, T>(position: &KeysetPosition<P, T>) -> Result<String, PaginationError>
where
    P: Serialize,
    T: Serialize,
{
    let payload = EncodedRef {
        v: CURSOR_VERSION,
        p: &position.primary,
        t: &position.tie_break,
    };
    let bytes = serde_json::to_vec(&payload)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Returns `None` for anything that is not a current-version cursor of the expected shape.
pub fn decode<P, T>(cursor: &str) -> Option<KeysetPosition<P, T>>
where
    P: DeserializeOwned,
    T: DeserializeOwned,
{
    let bytes = URL_SAFE_NO_PAD.decode(cursor.trim()).ok()?;
    let decoded: Encoded<P, T> = serde_json::from_slice(&bytes).ok()?;
    if decoded.v != CURSOR_VERSION {
        return None;
    }
    Some(KeysetPosition::new(decoded.p, decoded.t))
}
