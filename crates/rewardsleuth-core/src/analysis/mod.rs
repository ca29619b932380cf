/// Analysis modules — pure aggregate queries over the loaded table.

pub mod correlation;
pub mod countries;
pub mod distribution;
pub mod engagement;
pub mod kpis;
pub mod performers;
pub mod report;
pub mod reward_types;

pub use engagement::LOW_ENGAGEMENT_THRESHOLD;
pub use kpis::{kpis, Kpis};
pub use report::{ReportStats, DENSITY_SAMPLES, TOP_RESULTS};
