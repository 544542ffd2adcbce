pub mod error;
pub mod types;
pub mod orientation;
pub mod encode;
pub mod section;
pub mod conflict;
pub mod render;
pub mod driver;
pub mod ingest;
