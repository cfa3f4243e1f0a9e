//! Application services

mod dashboard_service;

pub use dashboard_service::{CurrentPanel, Dashboard, DashboardService, PLACEHOLDER};
