// Rarity value objects

use serde::{Deserialize, Serialize};

pub const FRAME_NORMAL: u8 = 0;
pub const FRAME_MAGIC: u8 = 1;
pub const FRAME_RARE: u8 = 2;
pub const FRAME_UNIQUE: u8 = 3;
pub const FRAME_GEM: u8 = 4;
/// Relic / alternate-art uniques share the unique equivalence class.
pub const FRAME_RELIC: u8 = 9;

/// The filter's rarity requirement. `NotUnique` is an equivalence class
/// excluding both unique frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RarityFilter {
    Any,
    Frame(u8),
    NotUnique,
}

impl RarityFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "any" | "" => Some(RarityFilter::Any),
            "not-unique" => Some(RarityFilter::NotUnique),
            other => other.parse::<u8>().ok().map(RarityFilter::Frame),
        }
    }

    pub fn matches(&self, frame_type: u8) -> bool {
        match self {
            RarityFilter::Any => true,
            RarityFilter::Frame(code) => *code == frame_type,
            RarityFilter::NotUnique => frame_type != FRAME_UNIQUE && frame_type != FRAME_RELIC,
        }
    }
}
