use crate::course::{Course, DEFAULT_YARDS_PER_TILE};

/// One club in a golfer's bag.
///
/// `carry_yards` is the maximum distance the club sends the ball before
/// landing; `dispersion_tiles` is the base landing scatter radius for a
/// comfortable (under-threshold) swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubSpec {
    pub name: &'static str,
    pub carry_yards: f32,
    pub dispersion_tiles: f32,
}

impl ClubSpec {
    const fn new(name: &'static str, carry_yards: f32, dispersion_tiles: f32) -> Self {
        Self {
            name,
            carry_yards,
            dispersion_tiles,
        }
    }
}

/// Longest-first bag of an accomplished amateur.
const SCRATCH_CLUBS: &[ClubSpec] = &[
    ClubSpec::new("driver", 260.0, 2.0),
    ClubSpec::new("3-wood", 235.0, 1.7),
    ClubSpec::new("5-iron", 195.0, 1.3),
    ClubSpec::new("7-iron", 170.0, 1.1),
    ClubSpec::new("9-iron", 145.0, 0.9),
    ClubSpec::new("pitching wedge", 115.0, 0.7),
    ClubSpec::new("sand wedge", 85.0, 0.6),
];

/// Shorter carries and wider misses for the average weekend player.
const BOGEY_CLUBS: &[ClubSpec] = &[
    ClubSpec::new("driver", 215.0, 3.2),
    ClubSpec::new("3-wood", 195.0, 2.7),
    ClubSpec::new("5-iron", 165.0, 2.2),
    ClubSpec::new("7-iron", 140.0, 1.8),
    ClubSpec::new("9-iron", 120.0, 1.5),
    ClubSpec::new("pitching wedge", 95.0, 1.2),
    ClubSpec::new("sand wedge", 70.0, 1.0),
];

/// The two fixed skill profiles the engine evaluates holes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GolferKind {
    /// Expert-level play; drives hole par and reachability.
    #[display("scratch")]
    Scratch,
    /// Average play; drives the bogey shot count.
    #[display("bogey")]
    Bogey,
}

/// A named skill profile: yard scale plus an ordered bag of clubs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GolferProfile {
    pub kind: GolferKind,
    pub yards_per_tile: f32,
    pub clubs: &'static [ClubSpec],
}

impl GolferProfile {
    /// Looks up the profile for `kind`, taking the yard scale from the
    /// course when one is supplied.
    #[must_use]
    pub fn of(kind: GolferKind, course: Option<&Course>) -> Self {
        let yards_per_tile =
            course.map_or(DEFAULT_YARDS_PER_TILE, Course::yards_per_tile);
        let clubs = match kind {
            GolferKind::Scratch => SCRATCH_CLUBS,
            GolferKind::Bogey => BOGEY_CLUBS,
        };
        Self {
            kind,
            yards_per_tile,
            clubs,
        }
    }

    /// Longest carry in the bag, in yards.
    #[must_use]
    pub fn max_carry_yards(&self) -> f32 {
        self.clubs
            .iter()
            .map(|club| club.carry_yards)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Course;

    #[test]
    fn course_scale_overrides_profile_default() {
        let mut course = Course::new(10, 10);
        course.set_yards_per_tile(7.5);
        let profile = GolferProfile::of(GolferKind::Scratch, Some(&course));
        assert!((profile.yards_per_tile - 7.5).abs() < f32::EPSILON);

        let fallback = GolferProfile::of(GolferKind::Scratch, None);
        assert!((fallback.yards_per_tile - DEFAULT_YARDS_PER_TILE).abs() < f32::EPSILON);
    }

    #[test]
    fn bags_are_ordered_longest_first() {
        for kind in [GolferKind::Scratch, GolferKind::Bogey] {
            let profile = GolferProfile::of(kind, None);
            assert!(!profile.clubs.is_empty());
            for pair in profile.clubs.windows(2) {
                assert!(pair[0].carry_yards > pair[1].carry_yards);
            }
        }
    }

    #[test]
    fn scratch_outdrives_bogey() {
        let scratch = GolferProfile::of(GolferKind::Scratch, None);
        let bogey = GolferProfile::of(GolferKind::Bogey, None);
        assert!(scratch.max_carry_yards() > bogey.max_carry_yards());
    }
}
