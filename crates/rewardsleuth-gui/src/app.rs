/// Main `eframe::App` implementation for RewardSleuth.
///
/// This is the top-level UI layout that composes the toolbar, the status
/// bar, and the dashboard's display regions in their fixed order.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::theme::RewardSleuthTheme;
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// initial load is already in flight before the OS window is created and
/// the first rendered frame arrives immediately.
pub struct RewardSleuthState {
    pub(crate) inner: AppState,
}

impl RewardSleuthState {
    /// Build state against the fixed export path and kick off the load.
    /// Call this before `eframe::run_native`.
    pub fn build() -> Self {
        let mut state = AppState::with_default_path();
        state.start_load();
        Self { inner: state }
    }
}

/// The RewardSleuth application.
pub struct RewardSleuthApp {
    state: AppState,
}

impl RewardSleuthApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by
    /// [`RewardSleuthState::build()`] *before* `eframe::run_native` is
    /// called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: RewardSleuthState) -> Self {
        RewardSleuthTheme::for_mode(state.inner.theme_mode).apply(&cc.egui_ctx);
        Self { state: state.inner }
    }
}

impl eframe::App for RewardSleuthApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling the theme takes effect
        // immediately on the next rendered frame.
        let theme = RewardSleuthTheme::for_mode(self.state.theme_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_load_messages();

        // Request continuous repaint while the load is in flight.
        if self.state.phase == AppPhase::Loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About RewardSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🎁 RewardSleuth")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "An analytics dashboard for rewards-programme\n\
                             redemption data: KPIs, rankings, and\n\
                             distribution charts over a CSV export.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.hyperlink_to(
                        "github.com/Swatto86/RewardSleuth",
                        "https://github.com/Swatto86/RewardSleuth",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("MIT License - (c) 2026 Swatto")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(2.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &theme, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel (dashboard) ─────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.phase {
                AppPhase::Loading => {
                    ui.add_space(48.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Loading redemption data...")
                                .color(theme.text_muted),
                        );
                    });
                }
                AppPhase::Failed => {
                    ui.add_space(48.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("\u{26a0} The report could not be generated")
                                .size(16.0)
                                .strong()
                                .color(theme.error),
                        );
                        ui.add_space(8.0);
                        if let Some(err) = &self.state.load_error {
                            ui.label(
                                egui::RichText::new(err.as_str())
                                    .size(12.0)
                                    .color(theme.text_secondary),
                            );
                        }
                        ui.add_space(12.0);
                        if ui.button("🔄 Try again").clicked() {
                            self.state.start_load();
                        }
                    });
                }
                AppPhase::Ready => {
                    if let Some(stats) = &self.state.stats {
                        ui.add_space(8.0);
                        ui.heading("Rewards Program Dashboard");
                        ui.add_space(12.0);

                        panels::kpi_panel::kpi_panel(ui, &theme, stats);

                        ui.add_space(16.0);
                        ui.separator();
                        ui.add_space(8.0);
                        panels::overview_panel::overview_panel(ui, &theme, stats);

                        ui.add_space(16.0);
                        ui.separator();
                        ui.add_space(8.0);
                        panels::breakdown_panel::breakdown_panel(ui, &theme, stats);

                        ui.add_space(16.0);
                        ui.separator();
                        ui.add_space(8.0);
                        panels::insight_panel::insight_panel(ui, &theme, stats);

                        ui.add_space(16.0);
                    }
                }
            });
        });
    }
}
