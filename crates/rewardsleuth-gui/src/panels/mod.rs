/// Dashboard display regions, in render order: KPI row, overview charts,
/// breakdown charts, insight charts.
pub mod breakdown_panel;
pub mod insight_panel;
pub mod kpi_panel;
pub mod overview_panel;
