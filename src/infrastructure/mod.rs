// Infrastructure layer - configuration and external adapters
pub mod config;
pub mod static_files;
pub mod token_client;
