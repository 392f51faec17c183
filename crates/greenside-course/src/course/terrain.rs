use serde::{Deserialize, Serialize};

/// Surface type of a single course tile.
///
/// Every tile carries exactly one terrain value. Obstacles (trees, bushes,
/// rocks) are an overlay on top of the terrain, not a terrain value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[display("fairway")]
    Fairway,
    #[display("rough")]
    Rough,
    #[display("deep rough")]
    DeepRough,
    #[display("sand")]
    Sand,
    #[display("water")]
    Water,
    #[display("green")]
    Green,
    #[display("tee")]
    Tee,
    #[display("path")]
    Path,
}

impl Terrain {
    pub const LEN: usize = 8;

    /// All terrain values, in histogram index order.
    pub const ALL: [Terrain; Terrain::LEN] = [
        Terrain::Fairway,
        Terrain::Rough,
        Terrain::DeepRough,
        Terrain::Sand,
        Terrain::Water,
        Terrain::Green,
        Terrain::Tee,
        Terrain::Path,
    ];

    /// Stable index of this terrain within [`Terrain::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Terrain::Water)
    }

    /// Whether a ball (or a tee/green marker) resting here counts as
    /// sitting in a hazard.
    #[must_use]
    pub const fn is_hazard(self) -> bool {
        matches!(self, Terrain::Water | Terrain::Sand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, terrain) in Terrain::ALL.iter().enumerate() {
            assert_eq!(terrain.index(), i);
        }
    }

    #[test]
    fn serde_uses_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&Terrain::DeepRough).unwrap(),
            "\"deep_rough\""
        );
        let parsed: Terrain = serde_json::from_str("\"fairway\"").unwrap();
        assert_eq!(parsed, Terrain::Fairway);
    }

    #[test]
    fn hazard_classification() {
        assert!(Terrain::Water.is_hazard());
        assert!(Terrain::Sand.is_hazard());
        assert!(!Terrain::Rough.is_hazard());
        assert!(!Terrain::Green.is_hazard());
    }
}
