use serde::{Deserialize, Serialize};

use super::grid::TilePos;

/// How a hole's par is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParSetting {
    /// Derive par from the scratch golfer's expected shots to green.
    Auto,
    /// A designer-set par, used verbatim.
    Manual(u32),
}

impl Default for ParSetting {
    fn default() -> Self {
        Self::Auto
    }
}

/// Definition of a single hole: tee and green markers plus the par mode.
///
/// Both markers are optional while the hole is being edited; the scorer
/// produces a sentinel score until both are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub tee: Option<TilePos>,
    pub green: Option<TilePos>,
    #[serde(default)]
    pub par: ParSetting,
}

impl Hole {
    #[must_use]
    pub const fn new(tee: TilePos, green: TilePos) -> Self {
        Self {
            tee: Some(tee),
            green: Some(green),
            par: ParSetting::Auto,
        }
    }

    #[must_use]
    pub const fn with_manual_par(mut self, par: u32) -> Self {
        self.par = ParSetting::Manual(par);
        self
    }
}
