// Collaborator Port Traits (Interfaces)
// Define what the evaluation engine needs from the outside world

pub mod lookups;
pub mod normalizer;

pub use lookups::*;
pub use normalizer::*;
