mod service;

pub use self::service::{DashboardServiceTrait, DynDashboardService};
