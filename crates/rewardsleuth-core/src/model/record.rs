/// A single redemption event — one CSV row.
///
/// Field names are bound to the exact column headers of the programme's
/// CSV export via serde renames. The header strings live in
/// [`columns`] so the loader can verify the schema up front and report
/// the missing column by name instead of failing row-by-row.
use compact_str::CompactString;
use serde::Deserialize;

use crate::error::SchemaError;

/// Expected column headers of the input file, in export order.
///
/// These are source-fidelity constants — the export format is fixed and
/// the names are matched verbatim, not re-derived.
pub mod columns {
    pub const MEMBER: &str = "Member_Name_Surname_Per_Redemption";
    pub const COUNTRY: &str = "Country";
    pub const REWARD: &str = "Reward_Received";
    pub const REDEMPTIONS: &str = "Redemptions_by_User";
    pub const REWARD_VALUE: &str = "Reward_Value_Amount_in_Dollars";
    pub const COST_PER_REDEMPTION: &str = "Cost_Per_Redemption_in_Dollars";
    pub const SATISFACTION: &str = "Satisfaction_Rating_on_Reward";
    pub const TIME_TO_REWARD: &str = "Time_to_Reward_Received_in_Seconds";

    /// All expected headers — the loader rejects a file missing any of them.
    pub const EXPECTED: [&str; 8] = [
        MEMBER,
        COUNTRY,
        REWARD,
        REDEMPTIONS,
        REWARD_VALUE,
        COST_PER_REDEMPTION,
        SATISFACTION,
        TIME_TO_REWARD,
    ];
}

/// One reward redemption event.
///
/// Grouping keys are `CompactString` — member names, countries, and reward
/// types are short and heavily repeated, so they stay inline instead of
/// each allocating a `String`.
///
/// Member names are NOT unique identifiers: two members sharing a full
/// name alias the same grouping key. That is a known limitation of the
/// source data, carried as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct RedemptionRecord {
    /// Member full name — grouping key for performer rankings.
    #[serde(rename = "Member_Name_Surname_Per_Redemption")]
    pub member_name: CompactString,

    /// Country the redemption was made from — grouping key.
    #[serde(rename = "Country")]
    pub country: CompactString,

    /// Reward type received — grouping key.
    #[serde(rename = "Reward_Received")]
    pub reward: CompactString,

    /// Redemption count attributed to this member — additive measure.
    #[serde(rename = "Redemptions_by_User")]
    pub redemptions: u64,

    /// Dollar value of the reward — additive measure.
    #[serde(rename = "Reward_Value_Amount_in_Dollars")]
    pub reward_value: f64,

    /// Dollar cost of fulfilling one redemption — averaged measure.
    #[serde(rename = "Cost_Per_Redemption_in_Dollars")]
    pub cost_per_redemption: f64,

    /// Satisfaction rating on a small ordinal scale — distributional measure.
    #[serde(rename = "Satisfaction_Rating_on_Reward")]
    pub satisfaction: f64,

    /// Seconds between redemption and reward receipt — correlated measure.
    #[serde(rename = "Time_to_Reward_Received_in_Seconds")]
    pub time_to_reward_secs: f64,
}

impl RedemptionRecord {
    /// Validate the numeric measures of a freshly-parsed row.
    ///
    /// `redemptions` is non-negative by type; the decimal measures must be
    /// finite and non-negative, and the rating must be finite. `line` is
    /// the 1-based line number of the row in the source file, used in the
    /// error message.
    pub fn validate(&self, line: u64) -> Result<(), SchemaError> {
        check_measure(columns::REWARD_VALUE, self.reward_value, line)?;
        check_measure(columns::COST_PER_REDEMPTION, self.cost_per_redemption, line)?;
        check_measure(columns::TIME_TO_REWARD, self.time_to_reward_secs, line)?;
        if !self.satisfaction.is_finite() {
            return Err(SchemaError::InvalidValue {
                column: columns::SATISFACTION.to_owned(),
                line,
                message: format!("{} is not a finite number", self.satisfaction),
            });
        }
        Ok(())
    }
}

/// A decimal measure must be a finite, non-negative number.
fn check_measure(column: &'static str, value: f64, line: u64) -> Result<(), SchemaError> {
    if !value.is_finite() {
        return Err(SchemaError::InvalidValue {
            column: column.to_owned(),
            line,
            message: format!("{value} is not a finite number"),
        });
    }
    if value < 0.0 {
        return Err(SchemaError::InvalidValue {
            column: column.to_owned(),
            line,
            message: format!("{value} is negative"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RedemptionRecord {
        RedemptionRecord {
            member_name: CompactString::new("Alice Archer"),
            country: CompactString::new("US"),
            reward: CompactString::new("Voucher"),
            redemptions: 10,
            reward_value: 50.0,
            cost_per_redemption: 2.5,
            satisfaction: 4.0,
            time_to_reward_secs: 3600.0,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(record().validate(2).is_ok());
    }

    /// Negative dollar amounts are mistyped data, not a valid measure.
    #[test]
    fn negative_measure_is_rejected() {
        let mut r = record();
        r.reward_value = -1.0;
        let err = r.validate(7).unwrap_err();
        match err {
            SchemaError::InvalidValue { column, line, .. } => {
                assert_eq!(column, columns::REWARD_VALUE);
                assert_eq!(line, 7);
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_measure_is_rejected() {
        let mut r = record();
        r.time_to_reward_secs = f64::NAN;
        assert!(r.validate(3).is_err());

        let mut r = record();
        r.satisfaction = f64::INFINITY;
        assert!(r.validate(3).is_err());
    }

    /// Zero is a legal value for every measure.
    #[test]
    fn zero_measures_are_valid() {
        let mut r = record();
        r.redemptions = 0;
        r.reward_value = 0.0;
        r.cost_per_redemption = 0.0;
        r.satisfaction = 0.0;
        r.time_to_reward_secs = 0.0;
        assert!(r.validate(2).is_ok());
    }
}
