// Matching services

pub mod affix_matcher;
pub mod price_evaluator;
pub mod property_matcher;

pub use affix_matcher::*;
pub use price_evaluator::*;
pub use property_matcher::*;
