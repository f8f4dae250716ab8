//! Work records parsed from catalog payloads.
//!
//! A subject search returns a `works` list; each entry becomes a
//! [`WorkSummary`] that lives only as long as the card built from it. The
//! detail endpoint returns a full work record whose only field the plugin
//! needs is the description, which arrives in one of several shapes.

use serde::Deserialize;
use serde_json::Value;

use super::error::Result;

/// Text shown when a work has no description.
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Deserialize)]
struct RawAuthor {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWork {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<Vec<RawAuthor>>,
    #[serde(default)]
    cover_id: Option<u64>,
    #[serde(default)]
    key: Option<String>,
}

/// One entry of a subject search's `works` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSummary {
    pub title: String,
    /// Display name of the first listed author, empty when there is none.
    pub author_name: String,
    pub cover_id: Option<u64>,
    /// Catalog key such as `/works/OL1W`, used for the detail request.
    pub detail_key: String,
}

impl From<RawWork> for WorkSummary {
    fn from(raw: RawWork) -> Self {
        let author_name = raw
            .authors
            .and_then(|authors| authors.into_iter().next())
            .and_then(|author| author.name)
            .unwrap_or_default();

        Self {
            title: raw.title.unwrap_or_default(),
            author_name,
            cover_id: raw.cover_id,
            detail_key: raw.key.unwrap_or_default(),
        }
    }
}

impl WorkSummary {
    /// Parses the value stored under a payload's `works` key.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Json`](super::ShelfError::Json) when the value is
    /// not a list of work objects.
    pub fn parse_list(works: Value) -> Result<Vec<Self>> {
        let raw: Vec<RawWork> = serde_json::from_value(works)?;
        Ok(raw.into_iter().map(Self::from).collect())
    }
}

/// The shapes a work's `description` field takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// A plain string.
    Text(String),
    /// A keyed mapping, typically `{"type": "/type/text", "value": "..."}`.
    Entries(Vec<(String, String)>),
    /// Missing, `null`, or a shape the plugin does not understand.
    Absent,
}

impl Description {
    /// Classifies a raw `description` value.
    #[must_use]
    pub fn from_value(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(text)) => Self::Text(text),
            Some(Value::Object(map)) => Self::Entries(
                map.into_iter()
                    .map(|(key, value)| {
                        let text = match value {
                            Value::String(s) => s,
                            other => other.to_string(),
                        };
                        (key, text)
                    })
                    .collect(),
            ),
            _ => Self::Absent,
        }
    }

    /// Text for the modal paragraph.
    ///
    /// Mappings show their `value` entry when present; otherwise every entry
    /// is shown in key order, separated by blank lines.
    ///
    /// ```
    /// use shelfscout::domain::Description;
    ///
    /// assert_eq!(Description::Absent.resolve(), "No description available");
    /// assert_eq!(Description::Text("A great read".into()).resolve(), "A great read");
    /// ```
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Absent => NO_DESCRIPTION.to_string(),
            Self::Entries(entries) => {
                if let Some((_, value)) = entries.iter().find(|(key, _)| key == "value") {
                    return value.clone();
                }
                if entries.is_empty() {
                    return NO_DESCRIPTION.to_string();
                }
                entries
                    .iter()
                    .map(|(_, value)| value.as_str())
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDetail {
    #[serde(default)]
    description: Option<Value>,
}

/// Everything the modal shows for one work.
///
/// Title and author come from the card the user opened; the detail record
/// only contributes the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDetail {
    pub title: String,
    pub author_name: String,
    pub description: Description,
}

impl WorkDetail {
    /// Builds a detail from a card's title and author plus the raw detail body.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Json`](super::ShelfError::Json) when the body is
    /// not a JSON object.
    pub fn from_body(title: &str, author_name: &str, body: &[u8]) -> Result<Self> {
        let raw: RawDetail = serde_json::from_slice(body)?;
        Ok(Self {
            title: title.to_string(),
            author_name: author_name.to_string(),
            description: Description::from_value(raw.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_work_entry() {
        let works = json!([{
            "title": "A Brief History of Time",
            "authors": [{"name": "Stephen Hawking"}, {"name": "Someone Else"}],
            "cover_id": 12345,
            "key": "/works/OL1W"
        }]);
        let parsed = WorkSummary::parse_list(works).unwrap();
        assert_eq!(
            parsed,
            vec![WorkSummary {
                title: "A Brief History of Time".into(),
                author_name: "Stephen Hawking".into(),
                cover_id: Some(12345),
                detail_key: "/works/OL1W".into(),
            }]
        );
    }

    #[test]
    fn missing_authors_default_to_empty_name() {
        let works = json!([
            {"title": "Anonymous", "key": "/works/OL2W"},
            {"title": "Nobody", "authors": [], "key": "/works/OL3W", "cover_id": null}
        ]);
        let parsed = WorkSummary::parse_list(works).unwrap();
        assert_eq!(parsed[0].author_name, "");
        assert_eq!(parsed[1].author_name, "");
        assert_eq!(parsed[1].cover_id, None);
    }

    #[test]
    fn non_list_works_is_an_error() {
        assert!(WorkSummary::parse_list(json!({"title": "x"})).is_err());
        assert!(WorkSummary::parse_list(json!([42])).is_err());
    }

    #[test]
    fn description_text_is_verbatim() {
        let detail = WorkDetail::from_body("T", "A", br#"{"description":"A great read"}"#).unwrap();
        assert_eq!(detail.description.resolve(), "A great read");
    }

    #[test]
    fn missing_or_null_description_is_absent() {
        let missing = WorkDetail::from_body("T", "A", br#"{"title":"T"}"#).unwrap();
        assert_eq!(missing.description, Description::Absent);
        assert_eq!(missing.description.resolve(), "No description available");

        let null = WorkDetail::from_body("T", "A", br#"{"description":null}"#).unwrap();
        assert_eq!(null.description, Description::Absent);
    }

    #[test]
    fn typed_description_prefers_value_entry() {
        let detail = WorkDetail::from_body(
            "T",
            "A",
            br#"{"description":{"type":"/type/text","value":"Long form text"}}"#,
        )
        .unwrap();
        assert_eq!(detail.description.resolve(), "Long form text");
    }

    #[test]
    fn mapping_without_value_joins_entries() {
        let description = Description::from_value(Some(json!({"en": "Hello", "fr": "Bonjour"})));
        assert_eq!(description.resolve(), "Hello\n\nBonjour");
        assert_eq!(Description::Entries(vec![]).resolve(), NO_DESCRIPTION);
    }

    #[test]
    fn detail_body_must_be_json() {
        assert!(WorkDetail::from_body("T", "A", b"<html>").is_err());
    }
}
