// Tri-state flag value object

use serde::{Deserialize, Serialize};

/// A yes/no criterion that can also be left unconstrained. The stored
/// form uses "true"/"false"/"any"; anything else behaves as "false",
/// matching the loose equality the legacy records relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriState {
    Any,
    Yes,
    No,
}

impl TriState {
    pub fn matches(&self, actual: bool) -> bool {
        match self {
            TriState::Any => true,
            TriState::Yes => actual,
            TriState::No => !actual,
        }
    }
}

impl From<&str> for TriState {
    fn from(raw: &str) -> Self {
        match raw {
            "any" => TriState::Any,
            "true" => TriState::Yes,
            _ => TriState::No,
        }
    }
}
