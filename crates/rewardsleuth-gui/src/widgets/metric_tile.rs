/// Scalar KPI tile — one headline number with its caption.
use crate::theme::RewardSleuthTheme;
use egui::{Align2, FontId, Sense, Ui, Vec2};

/// Tile height; width follows the available column width.
pub const TILE_HEIGHT: f32 = 64.0;

/// Draw a single KPI tile filling the available width.
pub fn metric_tile(ui: &mut Ui, theme: &RewardSleuthTheme, label: &str, value: &str) {
    let width = ui.available_width() - 4.0;
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(width, TILE_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 6.0, theme.surface);

    painter.text(
        rect.center() - Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        value,
        FontId::proportional(22.0),
        theme.accent,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 16.0),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(11.0),
        theme.text_muted,
    );
}
