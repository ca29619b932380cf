/// Delivery-time analysis — the scatter projection relating how long a
/// reward took to arrive with how it was rated, plus the headline
/// correlation figure.
use crate::model::Dataset;

/// One scatter point with its two auxiliary encodings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryPoint {
    /// X axis: seconds between redemption and receipt.
    pub time_to_reward_secs: f64,
    /// Y axis: satisfaction rating.
    pub satisfaction: f64,
    /// Colour encoding: dollar value of the reward.
    pub reward_value: f64,
    /// Size encoding: the member's redemption count on this row.
    pub redemptions: u64,
}

/// Project every row into a scatter point. Row order is preserved.
pub fn delivery_scatter(data: &Dataset) -> Vec<DeliveryPoint> {
    data.iter()
        .map(|r| DeliveryPoint {
            time_to_reward_secs: r.time_to_reward_secs,
            satisfaction: r.satisfaction,
            reward_value: r.reward_value,
            redemptions: r.redemptions,
        })
        .collect()
}

/// Pearson correlation between time-to-reward and satisfaction.
///
/// `None` when the coefficient is undefined: fewer than two rows, or
/// zero variance on either axis.
pub fn delivery_correlation(data: &Dataset) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;

    let mean_x = data.iter().map(|r| r.time_to_reward_secs).sum::<f64>() / nf;
    let mean_y = data.iter().map(|r| r.satisfaction).sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for r in data.iter() {
        let dx = r.time_to_reward_secs - mean_x;
        let dy = r.satisfaction - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_data::{dataset, row};

    fn timed_row(time_secs: f64, satisfaction: f64) -> crate::model::RedemptionRecord {
        let mut r = row("Alice Archer", "US", "Voucher", 1, 10.0);
        r.time_to_reward_secs = time_secs;
        r.satisfaction = satisfaction;
        r
    }

    #[test]
    fn scatter_projects_every_row_in_order() {
        let data = dataset(vec![timed_row(100.0, 5.0), timed_row(200.0, 3.0)]);
        let points = delivery_scatter(&data);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time_to_reward_secs, 100.0);
        assert_eq!(points[1].satisfaction, 3.0);
    }

    /// A perfectly inverse relationship scores -1.
    #[test]
    fn perfect_inverse_correlation() {
        let data = dataset(vec![
            timed_row(100.0, 5.0),
            timed_row(200.0, 4.0),
            timed_row(300.0, 3.0),
        ]);
        let r = delivery_correlation(&data).unwrap();
        assert!((r + 1.0).abs() < 1e-9, "expected r ≈ -1, got {r}");
    }

    #[test]
    fn undefined_correlation_is_none() {
        // Too few rows.
        assert!(delivery_correlation(&dataset(vec![timed_row(1.0, 1.0)])).is_none());
        // Zero variance in satisfaction.
        let flat = dataset(vec![timed_row(100.0, 4.0), timed_row(200.0, 4.0)]);
        assert!(delivery_correlation(&flat).is_none());
        // Empty table.
        assert!(delivery_correlation(&dataset(Vec::new())).is_none());
    }
}
