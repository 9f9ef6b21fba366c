//! Unified configuration layer.
//!
//! All environment-variable reads are centralized here; command code goes
//! through the structured config types instead of calling `std::env::var`
//! directly.
//!
//! - `loader`: env_or / env_optional / env_bool helpers and `.env` loading
//! - `schema`: EnvConfig, ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv};
pub use schema::{EnvConfig, ObservabilityConfig};
