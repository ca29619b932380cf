/// Overview row — satisfaction distribution and geographic split.
use crate::theme::RewardSleuthTheme;
use crate::widgets::density_chart::density_chart;
use crate::widgets::pie_chart::{pie_chart, Slice};
use egui::Ui;
use rewardsleuth_core::analysis::ReportStats;

/// Draw the two overview charts side by side.
pub fn overview_panel(ui: &mut Ui, theme: &RewardSleuthTheme, stats: &ReportStats) {
    ui.columns(2, |cols| {
        density_chart(
            &mut cols[0],
            theme,
            "Satisfaction Ratings Distribution",
            &stats.satisfaction_density,
            theme.accent,
        );

        let slices: Vec<Slice> = stats
            .redemptions_by_country
            .iter()
            .map(|c| Slice {
                label: c.country.to_string(),
                value: c.redemptions as f64,
            })
            .collect();
        pie_chart(&mut cols[1], theme, "Redemptions by Country", &slices);
    });
}
