/// Headline KPI scalars for the dashboard's metric row.
use std::collections::HashSet;

use crate::model::Dataset;

/// The three scalar summary metrics computed straight off the table.
/// (The fourth KPI tile, "Top Performers", is the length of the
/// performer ranking and comes from [`crate::analysis::performers`].)
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Kpis {
    /// Sum of the redemption counts across all rows.
    pub total_redemptions: u64,
    /// Sum of the reward dollar values across all rows.
    pub total_reward_value: f64,
    /// Number of unique member names. Names are the only identity the
    /// export carries, so namesakes count as one member.
    pub distinct_members: u64,
}

/// Compute the KPI scalars. An empty table yields all zeroes.
pub fn kpis(data: &Dataset) -> Kpis {
    let mut totals = Kpis::default();
    let mut members: HashSet<&str> = HashSet::new();

    for record in data.iter() {
        totals.total_redemptions += record.redemptions;
        totals.total_reward_value += record.reward_value;
        members.insert(record.member_name.as_str());
    }
    totals.distinct_members = members.len() as u64;
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_data::{dataset, row};

    #[test]
    fn sums_and_distinct_counts() {
        let data = dataset(vec![
            row("Alice Archer", "US", "Voucher", 10, 50.0),
            row("Bob Breen", "US", "Voucher", 3, 20.0),
            row("Alice Archer", "UK", "Gift Card", 2, 15.0),
        ]);

        let k = kpis(&data);
        assert_eq!(k.total_redemptions, 15);
        assert_eq!(k.total_reward_value, 85.0);
        assert_eq!(k.distinct_members, 2, "namesakes alias one member");
    }

    /// An empty table must yield zeroes, not panic.
    #[test]
    fn empty_table_yields_zeroes() {
        let k = kpis(&dataset(Vec::new()));
        assert_eq!(k, Kpis::default());
    }
}
