// SPDX-License-Identifier: MPL-2.0
//! Optional usage analytics.
//!
//! Events are delivered to an [`AnalyticsSink`]. When analytics is
//! disabled in the configuration a no-op sink is installed, so callers
//! never have to branch on the setting themselves.

use crate::config::Config;

/// Receiver for the two usage events the application emits.
pub trait AnalyticsSink {
    /// A module page was opened.
    fn module_view(&self, module: u32);
    /// A module was marked as completed for the first time.
    fn module_completed(&self, module: u32);
}

/// Sink that records events through the logging facade.
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn module_view(&self, module: u32) {
        log::info!(target: "analytics", "module_view module={module}");
    }

    fn module_completed(&self, module: u32) {
        log::info!(target: "analytics", "module_completed module={module}");
    }
}

/// Sink that drops every event.
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn module_view(&self, _module: u32) {}
    fn module_completed(&self, _module: u32) {}
}

/// Builds the sink matching the configuration. Analytics is opt-in.
pub fn from_config(config: &Config) -> Box<dyn AnalyticsSink> {
    if config.analytics.enabled.unwrap_or(false) {
        Box::new(LogSink)
    } else {
        Box::new(NoopSink)
    }
}
