//! Application shell.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`monitor_app`]   | [`MonitorApp`] (eframe) owning the panels and the launch-time side effects |
//! | [`run`]           | Top-level [`run_monitor()`] entry point and icon loading |

mod monitor_app;
mod run;

pub use monitor_app::MonitorApp;
pub use run::run_monitor;
