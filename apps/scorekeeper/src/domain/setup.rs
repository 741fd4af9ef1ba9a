use serde::{Deserialize, Serialize};

use crate::domain::rules::{PlayerCount, Variant};

/// The setup selection made before players are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(rename = "type")]
    pub variant: Variant,
    pub player_count: PlayerCount,
}

impl GameConfig {
    pub fn new(variant: Variant, player_count: PlayerCount) -> Self {
        Self {
            variant,
            player_count,
        }
    }
}
