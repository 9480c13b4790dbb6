pub mod config;
pub mod error;
pub mod export;
pub mod fixture;
pub mod logging;
pub mod view;
