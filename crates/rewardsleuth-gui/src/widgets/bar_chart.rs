/// Ranked bar chart — a descending list of label/value rows, each with a
/// proportional bar underneath. Ranking order is taken from the input
/// slice and preserved verbatim.
use crate::theme::RewardSleuthTheme;
use crate::widgets::{chart_title, empty_placeholder};
use egui::{Color32, Rect, Sense, Ui, Vec2};

/// One ranked entry.
pub struct Bar {
    /// Category label (member, reward type, country, …).
    pub label: String,
    /// Measure driving the bar length.
    pub value: f64,
    /// Pre-formatted display of `value` (count, dollars, …). The chart
    /// does no formatting of its own.
    pub display: String,
}

/// Draw a ranked bar chart. Bars are scaled against the first (largest)
/// value; an empty slice renders the shared placeholder.
pub fn bar_chart(ui: &mut Ui, theme: &RewardSleuthTheme, title: &str, bars: &[Bar], color: Color32) {
    chart_title(ui, theme, title);

    if bars.is_empty() {
        empty_placeholder(ui, theme);
        return;
    }

    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    for bar in bars {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&bar.label)
                    .size(12.0)
                    .color(theme.text_primary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&bar.display)
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            });
        });

        // Proportional mini bar under the label row.
        let bar_width = ui.available_width() - 8.0;
        let bar_height = 5.0;
        let (bar_rect, _) =
            ui.allocate_exact_size(Vec2::new(bar_width, bar_height), Sense::hover());
        let painter = ui.painter_at(bar_rect);
        painter.rect_filled(bar_rect, 2.0, theme.chart_track);

        let fraction = if max > 0.0 { (bar.value / max) as f32 } else { 0.0 };
        let fill_w = bar_width * fraction.clamp(0.0, 1.0);
        if fill_w > 0.5 {
            let fill_rect = Rect::from_min_size(bar_rect.min, Vec2::new(fill_w, bar_height));
            painter.rect_filled(fill_rect, 2.0, color);
        }

        ui.add_space(4.0);
    }
}
