pub mod compatible;
pub mod http_client;
pub mod scrub;
pub mod traits;

pub use compatible::OpenAiCompatibleProvider;
pub use http_client::build_provider_client;
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::Provider;
