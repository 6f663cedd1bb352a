//! DevMatch: developer compatibility scoring from public GitHub activity.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod github;
pub mod intelligence;
pub mod models;
pub mod services;

pub use error::{DevMatchError, Result};
