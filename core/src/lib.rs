//! RideGraph core – analyse av personlig treningshistorikk.
//!
//! Én batch rader inn, ren rapport ut: fordelinger, PR-progresjon per
//! varighet og rittvariant, streaks (strict og gap-tolerant) og totaler
//! med avledede sammenligninger. All rendering skjer hos mottakeren.

pub mod analyze;
pub mod dates;
pub mod distribution;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod progression;
pub mod streaks;
pub mod summary;
pub mod types;

pub use analyze::{analyze_history, analyze_history_json};
pub use dates::normalize;
pub use models::{parse_rows, FlexValue, IngestError, RawRow, WorkoutRecord};
pub use progression::{pr_progressions, select_pr, PrProgressions, PrSelection};
pub use streaks::Policy;
pub use types::{
    Cfg, Distribution, FavoriteDay, FunStats, HistoryReport, PrEntry, StreakReport, Totals,
};
