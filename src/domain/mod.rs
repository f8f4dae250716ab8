//! Domain layer for the shelfscout plugin.
//!
//! Catalog vocabulary independent of Zellij: queries, endpoints, work records
//! and errors.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`query`]: Subject query normalization
//! - [`catalog`]: Endpoint and cover URL construction
//! - [`work`]: Work summaries, details and description resolution
//!
//! # Examples
//!
//! ```
//! use shelfscout::domain::{Catalog, SearchQuery};
//!
//! let query = SearchQuery::parse(" Science ").expect("non-empty query");
//! let url = Catalog::default().search_url(&query);
//! assert!(url.ends_with("/subjects/science.json?limit=20"));
//! ```

pub mod catalog;
pub mod error;
pub mod query;
pub mod work;

pub use catalog::{Catalog, CoverImage, RESULT_LIMIT};
pub use error::{Result, ShelfError};
pub use query::SearchQuery;
pub use work::{Description, WorkDetail, WorkSummary};
