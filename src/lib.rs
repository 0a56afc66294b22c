//! GSearch - Google advanced search builder
//!
//! Composes Google advanced-query strings and search URLs from a structured
//! criteria record, keeps a recent-searches list in a flat file, and wraps
//! it all in a native egui form.
//!
//! # Features
//!
//! - **Query builder**: operator tokens (`site:`, `filetype:`, `intitle:`,
//!   `inurl:`, exclusions, OR groups, numeric ranges, `before:`/`after:`)
//!   assembled in a fixed, deterministic order
//! - **URL builder**: `q`/`tbm`/`tbs`/`cr` parameters from static lookup
//!   tables, including the advanced image-search filters
//! - **Recent queries**: last 20 searches persisted to a `[Recent]`
//!   key-value file, deduplicated and restorable field-for-field
//! - **Presets**: a menu of 20 ready-made example searches
//!
//! # Example
//!
//! ```
//! use gsearch::{build_query, search_url, SearchCriteria};
//!
//! let criteria = SearchCriteria {
//!     all_words: "laptop".to_string(),
//!     range_from: "500".to_string(),
//!     range_to: "1000".to_string(),
//!     range_unit: "$".to_string(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(build_query(&criteria), "laptop $500..$1000");
//! assert_eq!(
//!     search_url(&criteria),
//!     "https://www.google.com/search?q=laptop+%24500..%241000"
//! );
//! ```

pub mod criteria;
pub mod error;
pub mod gui;
pub mod logging;
pub mod presets;
pub mod query;
pub mod recent;
pub mod url;

// Re-export main types
pub use criteria::{
    AspectRatio, ColorFilter, ImageSize, ImageType, SearchCriteria, SearchType, SpecificColor,
    TermsLocation, UsageRights, ANY_REGION, REGIONS,
};
pub use error::{GsearchError, Result};
pub use query::build_query;
pub use recent::{RecentEntry, RecentStore, MAX_RECENT};
pub use url::{build_url_params, search_url, SEARCH_ENDPOINT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
