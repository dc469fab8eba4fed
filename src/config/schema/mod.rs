mod core;
mod feedback;
mod gateway;
mod links;
mod report;

pub use core::{Config, DEFAULT_MODEL};
pub use feedback::FeedbackConfig;
pub use gateway::GatewayConfig;
pub use links::LinkConfig;
pub use report::ReportConfig;
