/// Insight row — fulfilment cost ranking and the delivery-time scatter.
use crate::theme::RewardSleuthTheme;
use crate::widgets::bar_chart::{bar_chart, Bar};
use crate::widgets::scatter_chart::scatter_chart;
use egui::Ui;
use rewardsleuth_core::analysis::ReportStats;
use rewardsleuth_core::model::format::format_money;

/// Draw the two insight charts side by side.
pub fn insight_panel(ui: &mut Ui, theme: &RewardSleuthTheme, stats: &ReportStats) {
    ui.columns(2, |cols| {
        let costs: Vec<Bar> = stats
            .top_mean_cost
            .iter()
            .map(|c| Bar {
                label: c.name.to_string(),
                value: c.mean_cost,
                display: format_money(c.mean_cost),
            })
            .collect();
        bar_chart(
            &mut cols[0],
            theme,
            "Cost per Redemption",
            &costs,
            theme.chart_color(3),
        );

        scatter_chart(
            &mut cols[1],
            theme,
            "Time to Reward vs Satisfaction Rating",
            &stats.delivery_scatter,
            stats.delivery_correlation,
        );
    });
}
