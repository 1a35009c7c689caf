//! expansa-common — Shared types and errors used across all Expansa crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{
    ClinicalStatus, Confidence, DevelopmentPhase, EntityType, EvidenceFlags, EvidenceSource,
    Indication, RelationshipEdge, TargetProfile, Tier, Validation,
};
pub use error::{ApiError, ExpansaError, Result};
