//! RewardSleuth — rewards-programme analytics dashboard.
//!
//! Thin binary entry point. All logic lives in the `rewardsleuth-core`
//! and `rewardsleuth-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("RewardSleuth starting");

    let icon = rewardsleuth_gui::icon::generate_icon(64);

    // Build application state *before* opening the window so the initial
    // load is already running and the first rendered frame arrives
    // immediately instead of the OS filling the window with its default
    // background.
    let state = rewardsleuth_gui::RewardSleuthState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("RewardSleuth -- Rewards Program Dashboard")
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([800.0, 560.0])
            .with_icon(icon)
            .with_transparent(true),
        ..Default::default()
    };

    eframe::run_native(
        "RewardSleuth",
        options,
        Box::new(|cc| {
            Ok(Box::new(rewardsleuth_gui::RewardSleuthApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
