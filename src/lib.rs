//! EcoMimic landing site: page widgets, mock water telemetry and the small
//! HTTP server that hosts them.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
