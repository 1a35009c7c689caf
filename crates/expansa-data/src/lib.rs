//! The compiled-in RIPK1 indication expansion dataset.
//!
//! Every table is a process-lifetime constant built on first access. Nothing
//! here can fail and nothing is ever written back.

pub mod indications;
pub mod relationships;
pub mod dossiers;
pub mod landscape;

pub use dossiers::{dossier, dossiers, CompetitorEntry, Dossier, KeyEvidence};
pub use indications::{indication, indications};
pub use landscape::{programmes, Programme};
pub use relationships::relationships;

use expansa_common::TargetProfile;
use std::sync::OnceLock;

/// The single demo target.
pub fn target() -> &'static TargetProfile {
    static TARGET: OnceLock<TargetProfile> = OnceLock::new();
    TARGET.get_or_init(|| TargetProfile {
        symbol: "RIPK1".to_string(),
        full_name: "Receptor-Interacting Serine/Threonine-Protein Kinase 1".to_string(),
        summary: "Regulates cell death (necroptosis) and inflammatory signalling pathways.".to_string(),
    })
}
