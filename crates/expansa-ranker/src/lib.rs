//! Filter, aggregate and view-model layer over the indication table.
//!
//! Every function here is a pure recomputation from the static tables and a
//! [`selection::SelectionState`]; nothing is cached between calls.

pub mod selection;
pub mod filter;
pub mod summary;
pub mod analytics;
pub mod tiers;
pub mod detail;
pub mod network;
pub mod landscape;
pub mod export;

pub use filter::{apply_view, filter_indications, sort_indications, FilteredView};
pub use selection::{SelectionQuery, SelectionState, SortOrder};
pub use summary::{summarize, Summary};
pub use tiers::{check_tiers, TierMismatch, TierThresholds};
pub use detail::{indication_detail, IndicationDetail};
pub use network::{network_graph, NetworkGraph};
