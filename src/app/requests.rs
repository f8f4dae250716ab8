//! Request correlation and the latest-request-wins policy.
//!
//! Every outbound request carries a [`RequestTag`] in the `web_request`
//! context map so that its `WebRequestResult` can be routed back. A
//! [`RequestSlot`] remembers the one request of its kind whose answer still
//! matters; issuing a new request invalidates the previous one, and late
//! answers to invalidated requests are dropped.

use std::collections::BTreeMap;

const KIND_KEY: &str = "kind";
const TOKEN_KEY: &str = "token";
const INDEX_KEY: &str = "index";

/// Monotonic identifier of one outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Hands out strictly increasing tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    last: u64,
}

impl TokenCounter {
    pub fn next(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// What an in-flight request is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTag {
    Search { token: RequestToken },
    Detail { token: RequestToken },
    /// Cover probe for the card at `index` of the search `token`.
    Cover { token: RequestToken, index: usize },
}

impl RequestTag {
    /// Encodes the tag as a `web_request` context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        let (kind, token) = match self {
            Self::Search { token } => ("search", token),
            Self::Detail { token } => ("detail", token),
            Self::Cover { token, index } => {
                context.insert(INDEX_KEY.to_string(), index.to_string());
                ("cover", token)
            }
        };
        context.insert(KIND_KEY.to_string(), kind.to_string());
        context.insert(TOKEN_KEY.to_string(), token.value().to_string());
        context
    }

    /// Decodes a context map; `None` for requests this plugin did not tag.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let token = context
            .get(TOKEN_KEY)
            .and_then(|t| t.parse::<u64>().ok())
            .map(RequestToken)?;

        match context.get(KIND_KEY).map(String::as_str)? {
            "search" => Some(Self::Search { token }),
            "detail" => Some(Self::Detail { token }),
            "cover" => {
                let index = context.get(INDEX_KEY)?.parse().ok()?;
                Some(Self::Cover { token, index })
            }
            _ => None,
        }
    }
}

/// Single-slot tracker for one kind of request.
#[derive(Debug, Clone, Default)]
pub struct RequestSlot {
    latest: Option<RequestToken>,
    pending: bool,
}

impl RequestSlot {
    /// Records `token` as the only request whose answer is wanted.
    pub fn issue(&mut self, token: RequestToken) {
        self.latest = Some(token);
        self.pending = true;
    }

    /// Forgets any in-flight request without issuing a new one.
    pub fn invalidate(&mut self) {
        self.pending = false;
    }

    /// Marks `token` settled. Returns `false` when the answer is stale or
    /// was already consumed and must be ignored.
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if self.pending && self.latest == Some(token) {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Whether `token` is the most recently issued one, settled or not.
    #[must_use]
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_encodes_each_kind() {
        let mut counter = TokenCounter::default();
        let tags = [
            RequestTag::Search { token: counter.next() },
            RequestTag::Detail { token: counter.next() },
            RequestTag::Cover { token: counter.next(), index: 4 },
        ];
        for tag in tags {
            assert_eq!(RequestTag::from_context(&tag.to_context()), Some(tag));
        }
    }

    #[test]
    fn foreign_context_is_ignored() {
        assert_eq!(RequestTag::from_context(&BTreeMap::new()), None);

        let mut context = RequestTag::Search { token: RequestToken::new(1) }.to_context();
        context.insert("kind".into(), "upload".into());
        assert_eq!(RequestTag::from_context(&context), None);
    }

    #[test]
    fn newer_request_invalidates_older() {
        let mut counter = TokenCounter::default();
        let mut slot = RequestSlot::default();

        let first = counter.next();
        slot.issue(first);
        let second = counter.next();
        slot.issue(second);

        assert!(!slot.accept(first));
        assert!(slot.accept(second));
        assert!(!slot.accept(second), "an answer is consumed once");
        assert!(slot.is_latest(second));
        assert!(!slot.is_pending());
    }

    #[test]
    fn invalidate_drops_pending_answer() {
        let mut slot = RequestSlot::default();
        let token = RequestToken::new(9);
        slot.issue(token);
        slot.invalidate();
        assert!(!slot.accept(token));
    }
}
