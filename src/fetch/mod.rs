// src/fetch/mod.rs

pub mod client;
pub mod types;
pub mod urls;

pub use client::{FetchError, SrsClient, SubstanceLookup};
pub use types::{Substance, Synonym};
pub use urls::{build_url, sanitize};

#[cfg(test)]
pub(crate) mod stub;
