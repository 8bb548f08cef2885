pub mod config;
pub mod http_client;

pub use config::{load_dotenv, ConfigError, OutputFormat, PlayerConfig};
pub use http_client::HttpApiAdapter;
