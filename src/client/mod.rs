//! Catalog clients.
//!
//! Requests are issued by the plugin shim through Zellij's `web_request`; the
//! answer comes back later as a `WebRequestResult` event. The clients here are
//! the two ends of that exchange that do not touch the host: building the
//! request URL and interpreting the settled reply.
//!
//! - [`search`]: subject search, yielding cards or a failure
//! - [`detail`]: per-work detail, yielding the modal's content

pub mod detail;
pub mod search;

pub use search::SearchOutcome;

/// A settled HTTP exchange as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
