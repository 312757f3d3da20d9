use serde::{Deserialize, Serialize};

/// The edge of the intersection at which a vehicle arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
    East,
    West,
}

/// The turn a vehicle takes through the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Straight,
    Right,
}

/// One entry stream into the intersection: an entry side plus a turning direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lane {
    pub side: Side,
    pub direction: Direction,
}

impl Lane {
    pub fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }

    /// All 12 (side, direction) combinations, mapped or not.
    pub fn all() -> impl Iterator<Item = Lane> {
        [Side::North, Side::South, Side::East, Side::West]
            .into_iter()
            .flat_map(|side| {
                [Direction::Left, Direction::Straight, Direction::Right]
                    .into_iter()
                    .map(move |direction| Lane { side, direction })
            })
    }

    /// Two lanes conflict iff their occupied-zone sets intersect.
    pub fn conflicts_with(&self, other: &Lane) -> bool {
        let theirs = occupied_zones(*other);
        occupied_zones(*self).iter().any(|z| theirs.contains(z))
    }
}

/// A named physical region of the intersection. Three exit strips plus the
/// four quadrants of the center box. Paths leaving by the east edge are not
/// modeled, which is why there is no ExitEast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictZone {
    ExitNorth,
    ExitSouth,
    ExitWest,
    CenterNW,
    CenterNE,
    CenterSW,
    CenterSE,
}

impl ConflictZone {
    pub const COUNT: usize = 7;

    pub const ALL: [ConflictZone; ConflictZone::COUNT] = [
        ConflictZone::ExitNorth,
        ConflictZone::ExitSouth,
        ConflictZone::ExitWest,
        ConflictZone::CenterNW,
        ConflictZone::CenterNE,
        ConflictZone::CenterSW,
        ConflictZone::CenterSE,
    ];

    /// Stable index into per-zone storage (lock slots).
    pub fn index(self) -> usize {
        match self {
            ConflictZone::ExitNorth => 0,
            ConflictZone::ExitSouth => 1,
            ConflictZone::ExitWest => 2,
            ConflictZone::CenterNW => 3,
            ConflictZone::CenterNE => 4,
            ConflictZone::CenterSW => 5,
            ConflictZone::CenterSE => 6,
        }
    }
}

/// The zones a lane's path sweeps through, in the fixed scan order used by the
/// acquisition protocol. Combinations absent from the table (all of them paths
/// that would leave by the unmodeled east exit) return the empty slice and
/// cross without locking anything.
pub fn occupied_zones(lane: Lane) -> &'static [ConflictZone] {
    use ConflictZone::*;
    match (lane.side, lane.direction) {
        (Side::North, Direction::Straight) => &[CenterNW, CenterSW, ExitSouth],
        (Side::North, Direction::Right) => &[ExitWest],
        (Side::East, Direction::Left) => &[CenterSE, ExitSouth],
        (Side::East, Direction::Straight) => &[CenterNE, CenterNW, ExitWest],
        (Side::East, Direction::Right) => &[ExitNorth],
        (Side::South, Direction::Left) => &[CenterNW, CenterSE, ExitWest],
        (Side::South, Direction::Straight) => &[CenterNE, CenterSE, ExitNorth],
        (Side::West, Direction::Left) => &[CenterSW, CenterNE, ExitNorth],
        (Side::West, Direction::Right) => &[ExitSouth],
        _ => &[],
    }
}
