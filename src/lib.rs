pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::UploadConfig;
pub use error::AppError;
pub use services::controller::{UploadController, UploadState};
