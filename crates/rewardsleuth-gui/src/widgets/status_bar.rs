/// Bottom status bar — load progress and table statistics.
use crate::state::{AppPhase, AppState};
use crate::theme::RewardSleuthTheme;
use egui::Ui;
use rewardsleuth_core::model::format::{format_count, format_money};

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, theme: &RewardSleuthTheme, state: &AppState) {
    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Loading => {
                ui.spinner();
                ui.label(
                    egui::RichText::new(format!(
                        "Loading {}...",
                        state.data_path.display()
                    ))
                    .size(12.0)
                    .color(theme.text_primary),
                );
                if state.rows_read > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} rows", format_count(state.rows_read)))
                            .size(12.0)
                            .color(theme.text_secondary),
                    );
                }
            }
            AppPhase::Ready => {
                ui.label(
                    egui::RichText::new("\u{2713} Report ready")
                        .size(12.0)
                        .color(theme.success),
                );

                if let Some(stats) = &state.stats {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} rows",
                            format_count(state.rows_read)
                        ))
                        .size(12.0)
                        .color(theme.text_secondary),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} members",
                            format_count(stats.kpis.distinct_members)
                        ))
                        .size(12.0)
                        .color(theme.text_secondary),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format_money(stats.kpis.total_reward_value))
                            .size(12.0)
                            .color(theme.accent),
                    );
                }

                if let Some(duration) = state.load_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.2}s", duration.as_secs_f64()))
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }

                if let Some(at) = state.loaded_at {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("loaded {}", at.format("%H:%M:%S")))
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }
            }
            AppPhase::Failed => {
                ui.label(
                    egui::RichText::new("\u{26a0} Load failed")
                        .size(12.0)
                        .color(theme.error),
                );
                if let Some(err) = &state.load_error {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(err.as_str())
                            .size(12.0)
                            .color(theme.warning),
                    );
                }
            }
        }
    });
}
