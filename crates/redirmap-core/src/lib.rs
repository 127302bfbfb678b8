pub mod config;
pub mod logging;

// Matching core (no file I/O)
pub mod category;
pub mod index;
pub mod matcher;
pub mod redirects;
pub mod url_model;

// Inputs and outputs around the core
pub mod analysis;
pub mod batch;
pub mod inventory;
pub mod report;
pub mod sitemap;
