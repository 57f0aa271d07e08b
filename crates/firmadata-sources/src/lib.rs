pub mod ads;
pub mod aggregate;
pub mod directory;
pub mod error;
mod http;
pub mod registry;
pub mod search;

pub use ads::AdsClient;
pub use aggregate::{Aggregator, LookupOutcomes, SourceEndpoints};
pub use directory::{extract_listing, DirectoryClient};
pub use error::SourceError;
pub use registry::RegistryClient;
pub use search::placeholder_results;
