// Stashwatch Infrastructure Layer

pub mod categories;
pub mod config;

pub use categories::StaticCategoryIndex;
pub use config::AppConfig;
