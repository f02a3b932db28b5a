//! Transient value objects returned by the bridge.
//!
//! Entities are built fresh from one upstream response, handed to the
//! caller, and discarded; nothing here is cached or shared.

pub mod gene;
pub mod protein;
pub mod search;

pub use gene::GeneInfo;
pub use protein::ProteinInfo;
pub use search::SearchResult;

/// Outcome of a symbol search: the genes that resolved plus the ids that
/// were skipped because their individual fetch failed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SymbolMatches {
    pub genes: Vec<GeneInfo>,
    pub skipped: Vec<String>,
}
