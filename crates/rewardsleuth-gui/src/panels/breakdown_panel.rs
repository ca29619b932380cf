/// Breakdown row — performer and reward-type rankings.
use crate::theme::RewardSleuthTheme;
use crate::widgets::bar_chart::{bar_chart, Bar};
use egui::Ui;
use rewardsleuth_core::analysis::ReportStats;
use rewardsleuth_core::model::format::format_count;

/// Draw the three ranked bar charts side by side.
pub fn breakdown_panel(ui: &mut Ui, theme: &RewardSleuthTheme, stats: &ReportStats) {
    ui.columns(3, |cols| {
        let performers: Vec<Bar> = stats
            .top_performers
            .iter()
            .map(|p| Bar {
                label: p.name.to_string(),
                value: p.redemptions as f64,
                display: format_count(p.redemptions),
            })
            .collect();
        bar_chart(
            &mut cols[0],
            theme,
            "Top Performers",
            &performers,
            theme.chart_color(0),
        );

        let low_engagement: Vec<Bar> = stats
            .low_engagement_by_reward
            .iter()
            .map(|r| Bar {
                label: r.reward.to_string(),
                value: r.redemptions as f64,
                display: format_count(r.redemptions),
            })
            .collect();
        bar_chart(
            &mut cols[1],
            theme,
            "Low-Engagement Users - Reward Types",
            &low_engagement,
            theme.chart_color(1),
        );

        let reward_types: Vec<Bar> = stats
            .reward_type_counts
            .iter()
            .map(|c| Bar {
                label: c.reward.to_string(),
                value: c.count as f64,
                display: format_count(c.count),
            })
            .collect();
        bar_chart(
            &mut cols[2],
            theme,
            "Reward Types Distribution",
            &reward_types,
            theme.chart_color(4),
        );
    });
}
