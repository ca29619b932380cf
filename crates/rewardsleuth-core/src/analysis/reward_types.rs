/// Reward type frequency — how many redemption events each reward
/// category accounts for.
use std::collections::HashMap;

use compact_str::CompactString;

use crate::model::Dataset;

/// Row count for one reward type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardTypeCount {
    pub reward: CompactString,
    pub count: u64,
}

/// Count rows per reward type, descending (ties on reward name ascending).
///
/// Counts rows, not redemption sums — each row is one redemption event
/// record, so the counts sum to the table's row count.
pub fn reward_type_counts(data: &Dataset) -> Vec<RewardTypeCount> {
    let mut counts: HashMap<&CompactString, u64> = HashMap::new();
    for record in data.iter() {
        *counts.entry(&record.reward).or_insert(0) += 1;
    }

    let mut ranked: Vec<RewardTypeCount> = counts
        .into_iter()
        .map(|(reward, count)| RewardTypeCount {
            reward: reward.clone(),
            count,
        })
        .collect();

    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.reward.cmp(&b.reward)));
    ranked
}
