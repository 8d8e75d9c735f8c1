pub mod client;
pub mod config;
pub mod guides;
pub mod prompts;
pub mod request;
pub mod state;
