/// Geographic breakdown — redemption totals per country.
use std::collections::HashMap;

use compact_str::CompactString;

use crate::model::Dataset;

/// Redemptions attributed to one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRedemptions {
    pub country: CompactString,
    pub redemptions: u64,
}

/// Sum redemptions per country, descending (ties on country ascending).
pub fn redemptions_by_country(data: &Dataset) -> Vec<CountryRedemptions> {
    let mut totals: HashMap<&CompactString, u64> = HashMap::new();
    for record in data.iter() {
        *totals.entry(&record.country).or_insert(0) += record.redemptions;
    }

    let mut ranked: Vec<CountryRedemptions> = totals
        .into_iter()
        .map(|(country, redemptions)| CountryRedemptions {
            country: country.clone(),
            redemptions,
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.redemptions
            .cmp(&a.redemptions)
            .then_with(|| a.country.cmp(&b.country))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_data::{dataset, row};

    #[test]
    fn sums_per_country_descending() {
        let data = dataset(vec![
            row("Alice Archer", "US", "Voucher", 10, 0.0),
            row("Bob Breen", "US", "Voucher", 3, 0.0),
            row("Cara Cruz", "UK", "Gift Card", 20, 0.0),
        ]);

        let ranked = redemptions_by_country(&data);
        assert_eq!(ranked[0].country, "UK");
        assert_eq!(ranked[0].redemptions, 20);
        assert_eq!(ranked[1].country, "US");
        assert_eq!(ranked[1].redemptions, 13);
    }

    /// Country totals must account for every redemption exactly once.
    #[test]
    fn totals_sum_to_grand_total() {
        let data = dataset(vec![
            row("Alice Archer", "US", "Voucher", 10, 0.0),
            row("Bob Breen", "UK", "Voucher", 3, 0.0),
            row("Cara Cruz", "DE", "Gift Card", 2, 0.0),
        ]);

        let sum: u64 = redemptions_by_country(&data)
            .iter()
            .map(|c| c.redemptions)
            .sum();
        assert_eq!(sum, 15);
    }

    #[test]
    fn empty_table_yields_empty() {
        assert!(redemptions_by_country(&dataset(Vec::new())).is_empty());
    }
}
