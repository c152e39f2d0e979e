pub mod config;
pub mod fetch;
pub mod logging;
pub mod search;
pub mod table;

pub use config::{FailurePolicy, SearchConfig};
pub use fetch::{FetchError, SrsClient, Substance, SubstanceLookup};
pub use search::{search_file, search_ids, IdsOutput, SearchSummary};
