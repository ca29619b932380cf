/// The full derived-table bundle behind one dashboard render.
///
/// Computed once per loaded dataset and cached by the frontend — the
/// table is immutable after load, so this is indistinguishable from
/// recomputing per frame and avoids re-aggregating at render rate.
use super::correlation::{self, DeliveryPoint};
use super::countries::{self, CountryRedemptions};
use super::distribution::{self, DensityPoint};
use super::engagement::{self, RewardRedemptions};
use super::kpis::{self, Kpis};
use super::performers::{self, PerformerCost, PerformerRedemptions};
use super::reward_types::{self, RewardTypeCount};
use crate::model::Dataset;

/// Entries kept by each ranked chart.
pub const TOP_RESULTS: usize = 5;

/// Resolution of the satisfaction density curve.
pub const DENSITY_SAMPLES: usize = 128;

/// Every derived value the dashboard displays, in one pure snapshot.
#[derive(Debug, Clone, Default)]
pub struct ReportStats {
    pub kpis: Kpis,
    pub top_performers: Vec<PerformerRedemptions>,
    pub top_mean_cost: Vec<PerformerCost>,
    /// Row count of the low-engagement subset (`redemptions ≤ 5`).
    pub low_engagement_rows: usize,
    pub low_engagement_by_reward: Vec<RewardRedemptions>,
    pub reward_type_counts: Vec<RewardTypeCount>,
    pub redemptions_by_country: Vec<CountryRedemptions>,
    pub satisfaction_density: Vec<DensityPoint>,
    pub delivery_scatter: Vec<DeliveryPoint>,
    pub delivery_correlation: Option<f64>,
}

impl ReportStats {
    /// Run the whole aggregate battery over `data`.
    ///
    /// Each derived table is an independent pure query; an empty table
    /// produces zero/empty values throughout, never an error.
    pub fn compute(data: &Dataset) -> Self {
        Self {
            kpis: kpis::kpis(data),
            top_performers: performers::top_performers(data, TOP_RESULTS),
            top_mean_cost: performers::top_mean_cost(data, TOP_RESULTS),
            low_engagement_rows: engagement::low_engagement(data).len(),
            low_engagement_by_reward: engagement::low_engagement_by_reward(data, TOP_RESULTS),
            reward_type_counts: reward_types::reward_type_counts(data),
            redemptions_by_country: countries::redemptions_by_country(data),
            satisfaction_density: distribution::satisfaction_density(data, DENSITY_SAMPLES),
            delivery_scatter: correlation::delivery_scatter(data),
            delivery_correlation: correlation::delivery_correlation(data),
        }
    }
}
