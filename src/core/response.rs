use crate::domain::model::{Availability, MatchResult};
use crate::utils::error::{CheckError, ErrorKind, SERVER_ERROR_MESSAGE};
use serde::Serialize;

pub const NO_MATCH_MESSAGE: &str = "No warehouse matches the given pincode.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Match(MatchResult),
    Error { error: serde_json::Value },
}

/// HTTP status plus JSON body for one check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResponse {
    pub status_code: u16,
    pub body: ResponseBody,
    /// `None` for 200 responses, including "no match".
    pub error_kind: Option<ErrorKind>,
}

impl CheckResponse {
    pub fn matched(result: MatchResult) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Match(result),
            error_kind: None,
        }
    }

    pub fn no_match() -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Error {
                error: serde_json::Value::String(NO_MATCH_MESSAGE.to_string()),
            },
            error_kind: None,
        }
    }

    pub fn from_error(err: &CheckError) -> Self {
        Self {
            status_code: err.status_code(),
            body: ResponseBody::Error {
                error: err.response_detail(),
            },
            error_kind: Some(err.kind()),
        }
    }

    pub fn from_availability(availability: Availability) -> Self {
        match availability {
            Availability::Matched(result) => Self::matched(result),
            Availability::NoMatch => Self::no_match(),
        }
    }

    pub fn body_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_else(|e| {
            tracing::error!("Failed to encode response body: {}", e);
            format!(r#"{{"error":"{}"}}"#, SERVER_ERROR_MESSAGE)
        })
    }
}
