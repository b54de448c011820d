pub mod api;
pub mod config;
pub mod controller;
pub mod highlight;
pub mod loader;
pub mod models;
pub mod render;
pub mod search;
pub mod state;

pub use controller::Controller;
pub use loader::{LoadError, Source};
pub use models::{Editorial, Structure};
pub use search::Scope;
