//! Derived layers shared by canasta consumers (terminal UI, reports, web).
//!
//! Everything here is computed from `canasta-api` results; nothing talks to
//! the wire directly beyond driving the injected [`canasta_api::Client`].
//!
//! - **[`SeasonTotals`]** — per-player running sums across one team's season,
//!   up to and including the game day flagged current.
//! - **[`TeamRecord`]** — won/lost and aggregate score derived from a team's
//!   finished matches.
//! - **[`Memo`]** — keyed response memoizer owned and injected by the caller,
//!   replacing ambient global caches.

pub mod memo;
pub mod report;

pub use memo::Memo;
pub use report::{PlayerTotals, SeasonTotals, TeamRecord};
