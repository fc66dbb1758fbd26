//! Application State
//!
//! Shared state accessible by all API handlers.
//! Immutable after startup; every request builds its own generator.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::dashboard::DashboardOptions;
use crate::series::GeneratorConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Pipeline options used for every render
    pub dashboard: Arc<DashboardOptions>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig, generator: GeneratorConfig) -> Self {
        let dashboard = DashboardOptions {
            include_export: config.enable_export,
            ..DashboardOptions::new(generator)
        };

        Self {
            config: Arc::new(config),
            dashboard: Arc::new(dashboard),
            start_time: Instant::now(),
        }
    }

    /// Generator settings shared by every request
    pub fn generator(&self) -> &GeneratorConfig {
        &self.dashboard.generator
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
