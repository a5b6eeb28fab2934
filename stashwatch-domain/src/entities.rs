// Domain entities

pub mod config;
pub mod filter;
pub mod item;

pub use config::*;
pub use filter::*;
pub use item::*;
