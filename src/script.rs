pub mod config;
pub mod directive;
pub mod object;
pub mod scene;
pub mod tex;
