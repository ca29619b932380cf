/// Scatter plot with two auxiliary encodings — reward value maps to
/// colour intensity, redemption count maps to marker size. Hovering
/// near a marker highlights it and shows its figures.
use crate::theme::RewardSleuthTheme;
use crate::widgets::{chart_title, empty_placeholder, CHART_BODY_HEIGHT};
use egui::{Align2, FontId, Pos2, Sense, Stroke, Ui, Vec2};
use rewardsleuth_core::analysis::correlation::DeliveryPoint;
use rewardsleuth_core::model::format::{format_duration_secs, format_money};

/// Marker radius range for the size encoding.
const MARKER_MIN: f32 = 2.5;
const MARKER_MAX: f32 = 8.0;

/// Hover hit radius in pixels.
const HOVER_RADIUS: f32 = 10.0;

/// Draw the scatter chart. `correlation` (when defined) is annotated in
/// the top-right corner.
pub fn scatter_chart(
    ui: &mut Ui,
    theme: &RewardSleuthTheme,
    title: &str,
    points: &[DeliveryPoint],
    correlation: Option<f64>,
) {
    chart_title(ui, theme, title);

    if points.is_empty() {
        empty_placeholder(ui, theme);
        return;
    }

    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, CHART_BODY_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 4.0, theme.chart_track);

    // Axis and encoding ranges.
    let x_min = points
        .iter()
        .map(|p| p.time_to_reward_secs)
        .fold(f64::INFINITY, f64::min);
    let x_max = points
        .iter()
        .map(|p| p.time_to_reward_secs)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min = points
        .iter()
        .map(|p| p.satisfaction)
        .fold(f64::INFINITY, f64::min);
    let y_max = points
        .iter()
        .map(|p| p.satisfaction)
        .fold(f64::NEG_INFINITY, f64::max);
    let v_max = points
        .iter()
        .map(|p| p.reward_value)
        .fold(0.0_f64, f64::max);
    let r_max = points.iter().map(|p| p.redemptions).max().unwrap_or(0);

    let inset = rect.shrink(12.0);
    // A single-valued axis still needs a non-zero span to place points.
    let x_span = (x_max - x_min).max(f64::MIN_POSITIVE);
    let y_span = (y_max - y_min).max(f64::MIN_POSITIVE);

    let to_screen = |p: &DeliveryPoint| -> Pos2 {
        let tx = ((p.time_to_reward_secs - x_min) / x_span) as f32;
        let ty = ((p.satisfaction - y_min) / y_span) as f32;
        Pos2::new(
            inset.left() + tx * inset.width(),
            inset.bottom() - ty * inset.height(),
        )
    };

    // Nearest marker under the pointer, if any.
    let hovered = response.hover_pos().and_then(|pointer| {
        points
            .iter()
            .map(|p| (p, to_screen(p).distance(pointer)))
            .filter(|(_, d)| *d <= HOVER_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    });

    for p in points {
        let pos = to_screen(p);
        let t = if v_max > 0.0 {
            (p.reward_value / v_max) as f32
        } else {
            0.0
        };
        let radius = if r_max > 0 {
            MARKER_MIN + (MARKER_MAX - MARKER_MIN) * (p.redemptions as f32 / r_max as f32)
        } else {
            MARKER_MIN
        };
        painter.circle_filled(pos, radius, theme.value_color(t));
    }

    // Highlight ring + readout for the hovered marker.
    if let Some(p) = hovered {
        let pos = to_screen(p);
        painter.circle_stroke(pos, MARKER_MAX + 2.0, Stroke::new(1.5, theme.accent));
        painter.text(
            Pos2::new(inset.left(), rect.top() + 4.0),
            Align2::LEFT_TOP,
            format!(
                "{} · rated {:.0} · {} · ×{}",
                format_duration_secs(p.time_to_reward_secs),
                p.satisfaction,
                format_money(p.reward_value),
                p.redemptions
            ),
            FontId::proportional(11.0),
            theme.text_secondary,
        );
    }

    // Correlation annotation.
    if let Some(r) = correlation {
        painter.text(
            Pos2::new(inset.right(), rect.top() + 4.0),
            Align2::RIGHT_TOP,
            format!("r = {r:.2}"),
            FontId::proportional(11.0),
            theme.text_muted,
        );
    }

    // Axis extent labels.
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format_duration_secs(x_min))
                .size(10.0)
                .color(theme.text_muted),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format_duration_secs(x_max))
                    .size(10.0)
                    .color(theme.text_muted),
            );
        });
    });
}
