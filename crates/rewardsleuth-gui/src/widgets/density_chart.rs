/// Filled density curve — draws the kernel density estimate produced by
/// the analysis layer as a shaded area with a stroked outline.
use crate::theme::RewardSleuthTheme;
use crate::widgets::{chart_title, empty_placeholder, CHART_BODY_HEIGHT};
use egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use rewardsleuth_core::analysis::distribution::DensityPoint;

/// Draw the density curve. The x axis spans the curve's sample range;
/// the y axis spans zero to just above the curve's peak.
pub fn density_chart(
    ui: &mut Ui,
    theme: &RewardSleuthTheme,
    title: &str,
    curve: &[DensityPoint],
    color: Color32,
) {
    chart_title(ui, theme, title);

    if curve.len() < 2 {
        empty_placeholder(ui, theme);
        return;
    }

    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, CHART_BODY_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    let x_min = curve.first().map(|p| p.x).unwrap_or(0.0);
    let x_max = curve.last().map(|p| p.x).unwrap_or(1.0);
    let y_max = curve
        .iter()
        .map(|p| p.density)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE)
        * 1.05;

    let to_screen = |p: &DensityPoint| -> Pos2 {
        let tx = ((p.x - x_min) / (x_max - x_min)) as f32;
        let ty = (p.density / y_max) as f32;
        Pos2::new(
            rect.left() + tx * rect.width(),
            rect.bottom() - ty * (rect.height() - 4.0),
        )
    };

    // Shaded area: one convex quad per sample segment, down to the baseline.
    let fill = color.gamma_multiply(0.35);
    for pair in curve.windows(2) {
        let a = to_screen(&pair[0]);
        let b = to_screen(&pair[1]);
        painter.add(Shape::convex_polygon(
            vec![
                Pos2::new(a.x, rect.bottom()),
                a,
                b,
                Pos2::new(b.x, rect.bottom()),
            ],
            fill,
            Stroke::NONE,
        ));
    }

    // Outline on top of the fill.
    let outline: Vec<Pos2> = curve.iter().map(|p| to_screen(p)).collect();
    painter.add(Shape::line(outline, Stroke::new(1.5, color)));

    // Axis extent labels.
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{x_min:.1}"))
                .size(10.0)
                .color(theme.text_muted),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{x_max:.1}"))
                    .size(10.0)
                    .color(theme.text_muted),
            );
        });
    });
}
