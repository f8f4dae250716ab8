//! Work detail client.

use super::HttpReply;
use crate::domain::{Result, ShelfError, WorkDetail};

/// Interprets a settled detail request for the card titled `title` by `author_name`.
///
/// # Errors
///
/// Fails on a non-success status or a body that is not a JSON object.
pub fn interpret(reply: &HttpReply, title: &str, author_name: &str) -> Result<WorkDetail> {
    if !reply.is_success() {
        return Err(ShelfError::Http {
            status: reply.status,
        });
    }
    WorkDetail::from_body(title, author_name, &reply.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Description;

    #[test]
    fn success_carries_card_title_and_author() {
        let reply = HttpReply::new(200, br#"{"title":"Other","description":"A great read"}"#.to_vec());
        let detail = interpret(&reply, "A Brief History of Time", "Stephen Hawking").unwrap();
        assert_eq!(detail.title, "A Brief History of Time");
        assert_eq!(detail.author_name, "Stephen Hawking");
        assert_eq!(detail.description, Description::Text("A great read".into()));
    }

    #[test]
    fn failures_are_errors() {
        assert!(interpret(&HttpReply::new(500, vec![]), "T", "A").is_err());
        assert!(interpret(&HttpReply::new(200, b"oops".to_vec()), "T", "A").is_err());
    }
}
