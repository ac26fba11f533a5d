// URL Loader Library
// Declarative image options (layers, generative edits, delivery tweaks) translated into
// delivery URL transformations

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod logging;
pub mod plugins;
pub mod types;

pub use error::LoaderError;
pub use loader::{construct_asset, construct_url};
