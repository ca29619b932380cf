/// Low-engagement analysis — members redeeming at or below the
/// programme's engagement threshold, and which reward types they hold.
use std::collections::HashMap;

use compact_str::CompactString;

use crate::model::{Dataset, RedemptionRecord};

/// A row counts as low-engagement when its redemption count is at or
/// below this value. Fixed programme policy, inclusive.
pub const LOW_ENGAGEMENT_THRESHOLD: u64 = 5;

/// Redemptions attributed to one reward type within the low-engagement
/// subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardRedemptions {
    pub reward: CompactString,
    pub redemptions: u64,
}

/// The rows at or below [`LOW_ENGAGEMENT_THRESHOLD`].
///
/// Borrowed straight from the table — the subset and its complement
/// partition the full table exactly.
pub fn low_engagement(data: &Dataset) -> Vec<&RedemptionRecord> {
    data.iter()
        .filter(|r| r.redemptions <= LOW_ENGAGEMENT_THRESHOLD)
        .collect()
}

/// Within the low-engagement subset: redemptions summed per reward type,
/// descending (ties on reward name ascending), top `max_results`.
pub fn low_engagement_by_reward(data: &Dataset, max_results: usize) -> Vec<RewardRedemptions> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut totals: HashMap<&CompactString, u64> = HashMap::new();
    for record in low_engagement(data) {
        *totals.entry(&record.reward).or_insert(0) += record.redemptions;
    }

    let mut ranked: Vec<RewardRedemptions> = totals
        .into_iter()
        .map(|(reward, redemptions)| RewardRedemptions {
            reward: reward.clone(),
            redemptions,
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.redemptions
            .cmp(&a.redemptions)
            .then_with(|| a.reward.cmp(&b.reward))
    });
    ranked.truncate(max_results);
    ranked
}
