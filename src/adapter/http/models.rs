//! HTTP Wire Models
//!
//! Request bodies that exist only on the wire

use serde::Serialize;

/// Body of `POST /draft`
#[derive(Debug, Serialize)]
pub struct DraftRequestBody<'a> {
    pub text: &'a str,
}
