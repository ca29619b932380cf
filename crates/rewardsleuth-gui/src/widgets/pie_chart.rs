/// Pie chart — proportional wedges with a percentage legend.
///
/// egui's tessellator only fills convex shapes, so each slice is drawn
/// as one or more sub-wedges of at most a quarter turn; a wedge that
/// small is always convex.
use crate::theme::RewardSleuthTheme;
use crate::widgets::{chart_title, empty_placeholder, CHART_BODY_HEIGHT};
use egui::{Pos2, Sense, Shape, Stroke, Ui, Vec2};

/// One pie slice.
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// Arc step in radians — small enough that the rim looks round at the
/// sizes the dashboard draws.
const ARC_STEP: f32 = 0.05;

/// Draw a pie chart with a colour-keyed legend underneath.
///
/// Slices start at twelve o'clock and proceed clockwise in input order.
/// Slices with a non-positive value contribute nothing but keep their
/// legend entry (and its 0.0% share).
pub fn pie_chart(ui: &mut Ui, theme: &RewardSleuthTheme, title: &str, slices: &[Slice]) {
    chart_title(ui, theme, title);

    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if slices.is_empty() || total <= 0.0 {
        empty_placeholder(ui, theme);
        return;
    }

    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, CHART_BODY_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    let radius = (CHART_BODY_HEIGHT * 0.5 - 6.0).min(width * 0.5 - 6.0);
    let center = rect.center();

    // Start at twelve o'clock, clockwise.
    let mut angle = -std::f32::consts::FRAC_PI_2;
    for (i, slice) in slices.iter().enumerate() {
        let sweep = (slice.value.max(0.0) / total) as f32 * std::f32::consts::TAU;
        if sweep <= 0.0 {
            continue;
        }
        let color = theme.chart_color(i);

        // Split into quarter-turn sub-wedges so every polygon is convex.
        let mut remaining = sweep;
        let mut start = angle;
        while remaining > 0.0 {
            let part = remaining.min(std::f32::consts::FRAC_PI_2);
            let mut points = vec![center];
            let steps = (part / ARC_STEP).ceil().max(1.0) as usize;
            for s in 0..=steps {
                let a = start + part * s as f32 / steps as f32;
                points.push(Pos2::new(
                    center.x + radius * a.cos(),
                    center.y + radius * a.sin(),
                ));
            }
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
            start += part;
            remaining -= part;
        }
        angle += sweep;
    }

    // Legend with one-decimal percentage shares.
    ui.add_space(4.0);
    for (i, slice) in slices.iter().enumerate() {
        let pct = slice.value.max(0.0) / total * 100.0;
        ui.horizontal(|ui| {
            let (dot_rect, _) =
                ui.allocate_exact_size(Vec2::new(10.0, 10.0), Sense::hover());
            ui.painter_at(dot_rect)
                .circle_filled(dot_rect.center(), 4.0, theme.chart_color(i));

            ui.label(
                egui::RichText::new(&slice.label)
                    .size(12.0)
                    .color(theme.text_primary),
            );
            ui.label(
                egui::RichText::new(format!("({pct:.1}%)"))
                    .size(11.0)
                    .color(theme.text_muted),
            );
        });
    }
}
