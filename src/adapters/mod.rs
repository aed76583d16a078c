// Adapters - External system implementations

pub mod console_prompt;
pub mod http_fetch;
pub mod scripted_prompt;
pub mod toml_config;

// Re-export adapters
pub use console_prompt::ConsoleDurationProvider;
pub use http_fetch::HttpFetcher;
pub use scripted_prompt::ScriptedDurationProvider;
pub use toml_config::TomlConfigAdapter;
