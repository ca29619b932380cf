/// KPI row — the four headline metric tiles.
use crate::theme::RewardSleuthTheme;
use crate::widgets::metric_tile::{metric_tile, TILE_HEIGHT};
use egui::Ui;
use egui_extras::{Size, StripBuilder};
use rewardsleuth_core::analysis::ReportStats;
use rewardsleuth_core::model::format::{format_count, format_money};

/// Draw the four KPI tiles in a fixed-height row of equal columns.
///
/// The tile captions keep the programme's reporting vocabulary
/// ("New Users" is the distinct-member count; names are the only
/// identity the export carries).
pub fn kpi_panel(ui: &mut Ui, theme: &RewardSleuthTheme, stats: &ReportStats) {
    StripBuilder::new(ui)
        .size(Size::exact(TILE_HEIGHT))
        .vertical(|mut strip| {
            strip.strip(|builder| {
                builder.sizes(Size::remainder(), 4).horizontal(|mut strip| {
                    strip.cell(|ui| {
                        metric_tile(
                            ui,
                            theme,
                            "Total Redemptions",
                            &format_count(stats.kpis.total_redemptions),
                        );
                    });
                    strip.cell(|ui| {
                        metric_tile(
                            ui,
                            theme,
                            "Total Reward Value ($)",
                            &format_money(stats.kpis.total_reward_value),
                        );
                    });
                    strip.cell(|ui| {
                        metric_tile(
                            ui,
                            theme,
                            "New Users",
                            &format_count(stats.kpis.distinct_members),
                        );
                    });
                    strip.cell(|ui| {
                        metric_tile(
                            ui,
                            theme,
                            "Top Performers",
                            &stats.top_performers.len().to_string(),
                        );
                    });
                });
            });
        });
}
