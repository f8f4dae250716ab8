//! Subject search client.

use serde_json::Value;

use super::HttpReply;
use crate::domain::{ShelfError, WorkSummary};

/// Key of the result list inside a subject payload.
const WORKS_KEY: &str = "works";

/// What a settled search means for the UI.
#[derive(Debug)]
pub enum SearchOutcome {
    /// At least one work, in the order the catalog returned them.
    ///
    /// `empty_entry` is set when some other top-level entry of the payload
    /// is an empty list or string.
    Works {
        works: Vec<WorkSummary>,
        empty_entry: bool,
    },
    /// The payload was usable but listed no works.
    NoResults,
    /// Transport, status or payload failure.
    Failed(ShelfError),
}

/// Interprets a settled subject search.
///
/// Only the `works` entry of the payload is rendered. Other keys only count
/// when their value is empty, which flags the outcome as having no results.
/// A payload without any works (an empty list, or no list at all) is
/// [`SearchOutcome::NoResults`].
#[must_use]
pub fn interpret(reply: &HttpReply) -> SearchOutcome {
    match parse(reply) {
        Ok((works, _)) if works.is_empty() => SearchOutcome::NoResults,
        Ok((works, empty_entry)) => SearchOutcome::Works { works, empty_entry },
        Err(e) => SearchOutcome::Failed(e),
    }
}

fn parse(reply: &HttpReply) -> crate::domain::Result<(Vec<WorkSummary>, bool)> {
    if !reply.is_success() {
        return Err(ShelfError::Http {
            status: reply.status,
        });
    }

    let payload: Value = serde_json::from_slice(&reply.body)?;
    if !is_truthy(&payload) {
        return Err(ShelfError::EmptyPayload);
    }

    let Value::Object(mut entries) = payload else {
        return Err(ShelfError::Payload("expected an object".to_string()));
    };

    let empty_entry = entries.values().any(is_empty_entry);
    if empty_entry {
        tracing::debug!("subject payload has an empty entry");
    }

    let works = match entries.remove(WORKS_KEY) {
        Some(works) => WorkSummary::parse_list(works)?,
        None => {
            tracing::debug!("subject payload has no works entry");
            Vec::new()
        }
    };
    Ok((works, empty_entry))
}

/// A list or string of length zero.
fn is_empty_entry(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// JavaScript-style truthiness; objects and arrays are always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
