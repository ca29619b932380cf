/// Top action bar -- reload control, theme toggle, and branding.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🎁 RewardSleuth")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Reload button — disabled while a load is already in flight.
        // An unchanged file completes instantly off the cache.
        let can_reload = state.phase != AppPhase::Loading;
        let reload_btn = ui.add_enabled(
            can_reload,
            egui::Button::new("🔄 Reload").min_size(egui::vec2(80.0, 28.0)),
        );
        if reload_btn
            .on_hover_text("Re-read the export if it changed on disk")
            .clicked()
        {
            state.start_load();
        }

        ui.separator();

        // Source file indicator.
        ui.label(
            egui::RichText::new(state.data_path.display().to_string())
                .size(11.0)
                .color(ui.visuals().weak_text_color()),
        );

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About RewardSleuth").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = match state.theme_mode {
                crate::theme::ThemeMode::Dark => "☀",
                crate::theme::ThemeMode::Light => "🌙",
            };
            let theme_tip = match state.theme_mode {
                crate::theme::ThemeMode::Dark => "Switch to light mode",
                crate::theme::ThemeMode::Light => "Switch to dark mode",
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.theme_mode.toggle();
            }
        });
    });
}
