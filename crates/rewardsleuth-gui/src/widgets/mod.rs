/// Reusable dashboard widgets — metric tiles, chart primitives, chrome.
///
/// All chart widgets are free functions drawing with the egui painter.
/// Every one of them degrades to a muted placeholder when its table is
/// empty: one empty panel must never take down the rest of the report.
pub mod bar_chart;
pub mod density_chart;
pub mod metric_tile;
pub mod pie_chart;
pub mod scatter_chart;
pub mod status_bar;
pub mod toolbar;

use crate::theme::RewardSleuthTheme;
use egui::Ui;

/// Height of a chart widget's drawing area, excluding title and legend.
pub(crate) const CHART_BODY_HEIGHT: f32 = 170.0;

/// Standard chart title row.
pub(crate) fn chart_title(ui: &mut Ui, theme: &RewardSleuthTheme, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .size(13.0)
            .strong()
            .color(theme.text_secondary),
    );
    ui.add_space(4.0);
}

/// Muted placeholder rendered in place of a chart with nothing to show.
pub(crate) fn empty_placeholder(ui: &mut Ui, theme: &RewardSleuthTheme) {
    ui.label(
        egui::RichText::new("No data to display")
            .size(12.0)
            .italics()
            .color(theme.text_muted),
    );
}
