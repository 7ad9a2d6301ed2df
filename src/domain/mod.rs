// Domain layer - widget state, telemetry and page content
pub mod catalog;
pub mod chart;
pub mod selection;
pub mod telemetry;
pub mod toggle;
