pub mod schema;

pub use schema::{
    Config, DEFAULT_MODEL, FeedbackConfig, GatewayConfig, LinkConfig, ReportConfig,
};
