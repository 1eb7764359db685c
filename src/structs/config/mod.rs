pub mod analysis_config;
pub mod api_config;
pub mod config;
pub mod output_config;
