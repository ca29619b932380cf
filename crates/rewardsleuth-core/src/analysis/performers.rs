/// Member rankings — redemption totals and fulfilment cost averages.
///
/// Both rankings group by member name, order on the measure descending,
/// and break ties on the name ascending so the output is deterministic
/// across runs (no reliance on hash-map iteration or sort stability).
use std::collections::HashMap;

use compact_str::CompactString;

use crate::model::Dataset;

/// A member's combined redemption total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformerRedemptions {
    pub name: CompactString,
    pub redemptions: u64,
}

/// A member's mean fulfilment cost per redemption.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformerCost {
    pub name: CompactString,
    pub mean_cost: f64,
}

/// Top members by combined redemption count, descending.
///
/// Returns at most `max_results` entries; with `max_results == 0` the
/// result is trivially empty.
pub fn top_performers(data: &Dataset, max_results: usize) -> Vec<PerformerRedemptions> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut totals: HashMap<&CompactString, u64> = HashMap::new();
    for record in data.iter() {
        *totals.entry(&record.member_name).or_insert(0) += record.redemptions;
    }

    let mut ranked: Vec<PerformerRedemptions> = totals
        .into_iter()
        .map(|(name, redemptions)| PerformerRedemptions {
            name: name.clone(),
            redemptions,
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.redemptions
            .cmp(&a.redemptions)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(max_results);
    ranked
}

/// Top members by mean cost-per-redemption, descending.
///
/// The mean is over that member's rows (each row carries one
/// cost-per-redemption figure), matching the source programme's
/// per-member averaging.
pub fn top_mean_cost(data: &Dataset, max_results: usize) -> Vec<PerformerCost> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut sums: HashMap<&CompactString, (f64, u64)> = HashMap::new();
    for record in data.iter() {
        let entry = sums.entry(&record.member_name).or_insert((0.0, 0));
        entry.0 += record.cost_per_redemption;
        entry.1 += 1;
    }

    let mut ranked: Vec<PerformerCost> = sums
        .into_iter()
        .map(|(name, (sum, count))| PerformerCost {
            name: name.clone(),
            mean_cost: sum / count as f64,
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.mean_cost
            .total_cmp(&a.mean_cost)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(max_results);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_data::{dataset, row};

    #[test]
    fn sums_across_a_members_rows() {
        let data = dataset(vec![
            row("Alice Archer", "US", "Voucher", 10, 50.0),
            row("Bob Breen", "US", "Voucher", 3, 20.0),
            row("Alice Archer", "UK", "Gift Card", 2, 15.0),
        ]);

        let ranked = top_performers(&data, 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Alice Archer");
        assert_eq!(ranked[0].redemptions, 12, "10 + 2 combined");
        assert_eq!(ranked[1].redemptions, 3);
    }

    #[test]
    fn max_results_is_respected() {
        let data = dataset(
            (0..8)
                .map(|i| row(&format!("Member {i}"), "US", "Voucher", i, 0.0))
                .collect(),
        );
        assert_eq!(top_performers(&data, 5).len(), 5);
        assert!(top_performers(&data, 0).is_empty());
    }

    /// Equal totals must order by name so reruns agree.
    #[test]
    fn ties_break_on_name_ascending() {
        let data = dataset(vec![
            row("Cara Cruz", "US", "Voucher", 4, 0.0),
            row("Alice Archer", "US", "Voucher", 4, 0.0),
            row("Bob Breen", "US", "Voucher", 4, 0.0),
        ]);

        let ranked = top_performers(&data, 5);
        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Archer", "Bob Breen", "Cara Cruz"]);
    }

    #[test]
    fn empty_table_ranks_nothing() {
        assert!(top_performers(&dataset(Vec::new()), 5).is_empty());
        assert!(top_mean_cost(&dataset(Vec::new()), 5).is_empty());
    }

    #[test]
    fn mean_cost_averages_per_member_rows() {
        let mut a1 = row("Alice Archer", "US", "Voucher", 10, 50.0);
        a1.cost_per_redemption = 2.0;
        let mut a2 = row("Alice Archer", "UK", "Gift Card", 2, 15.0);
        a2.cost_per_redemption = 4.0;
        let mut b = row("Bob Breen", "US", "Voucher", 3, 20.0);
        b.cost_per_redemption = 5.0;
        let data = dataset(vec![a1, a2, b]);

        let ranked = top_mean_cost(&data, 5);
        assert_eq!(ranked[0].name, "Bob Breen");
        assert_eq!(ranked[0].mean_cost, 5.0);
        assert_eq!(ranked[1].name, "Alice Archer");
        assert_eq!(ranked[1].mean_cost, 3.0, "(2 + 4) / 2 rows");
    }
}
