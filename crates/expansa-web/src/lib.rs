//! Expansa web server: indication expansion dashboard for sales demos.
//! Serves:
//!   - Discovery dashboard (filters, counters, ranked table, charts)
//!   - Per-indication deep-dive with dossier and evidence radar
//!   - Target → pathway → indication network
//!   - Competitive landscape & methodology
//!   - JSON API and CSV export over the same view model

pub mod router;
pub mod handlers;
pub mod state;
pub mod templates;
