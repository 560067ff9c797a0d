//! Turn-by-turn narration of a path.
//!
//! The narrator walks a vertex path hop by hop.  Each hop `curr → next` is
//! described relative to the hop that led into `curr`:
//!
//! | Condition at `curr`                                   | Instruction       |
//! |-------------------------------------------------------|-------------------|
//! | first hop of the path                                 | `Depart`          |
//! | more incident streets than the roundabout threshold   | `RoundaboutExit`  |
//! | same shared street on `prev → curr` and `curr → next` | `Straight`        |
//! | otherwise                                             | `Turn`            |
//!
//! Hop distances are straight-line, in metres.

use std::fmt;

use sr_core::Coord;
use sr_network::Intersection;

/// Intersections with more incident streets than this are roundabouts.
pub const DEFAULT_ROUNDABOUT_THRESHOLD: usize = 3;

// ── TurnDirection / TurnRule ──────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the side of a turn at `curr` is decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnRule {
    /// Right iff the next hop moves towards larger `x`.
    #[default]
    CoordinateDelta,

    /// Right iff the signed angle from `prev → curr` to `prev → next`,
    /// normalised to (-180°, 180°], is non-negative.
    Angle,
}

impl TurnRule {
    pub fn direction(self, prev: Coord, curr: Coord, next: Coord) -> TurnDirection {
        let right = match self {
            TurnRule::CoordinateDelta => next.x - curr.x > 0,
            TurnRule::Angle => signed_angle_deg(prev.delta(curr), prev.delta(next)) >= 0.0,
        };
        if right { TurnDirection::Right } else { TurnDirection::Left }
    }
}

/// Angle from `v1` to `v2` in degrees, in (-180, 180].
fn signed_angle_deg(v1: (i64, i64), v2: (i64, i64)) -> f64 {
    let a1 = (v1.1 as f64).atan2(v1.0 as f64);
    let a2 = (v2.1 as f64).atan2(v2.0 as f64);
    let deg = (a2 - a1).to_degrees();
    if deg > 180.0 {
        deg - 360.0
    } else if deg <= -180.0 {
        deg + 360.0
    } else {
        deg
    }
}

// ── NarratorConfig ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NarratorConfig {
    pub turn_rule: TurnRule,

    /// Default: 3.
    pub roundabout_threshold: usize,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            turn_rule: TurnRule::default(),
            roundabout_threshold: DEFAULT_ROUNDABOUT_THRESHOLD,
        }
    }
}

// ── Instruction ───────────────────────────────────────────────────────────────

/// One step of a route narrative.
///
/// `street` is `None` when the two ends of a hop share no street name.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// From the origin address to the first intersection.
    Start { street: String, meters: f64 },
    Depart { street: Option<String>, meters: f64 },
    Straight { street: Option<String>, meters: f64 },
    Turn { direction: TurnDirection, street: Option<String>, meters: f64 },
    RoundaboutExit { street: Option<String>, meters: f64 },
    /// From the last intersection to the destination address.
    Finish { street: String, meters: f64 },
    Arrive,
}

impl Instruction {
    /// Length of the step in metres (zero for `Arrive`).
    pub fn meters(&self) -> f64 {
        match self {
            Instruction::Start { meters, .. }
            | Instruction::Depart { meters, .. }
            | Instruction::Straight { meters, .. }
            | Instruction::Turn { meters, .. }
            | Instruction::RoundaboutExit { meters, .. }
            | Instruction::Finish { meters, .. } => *meters,
            Instruction::Arrive => 0.0,
        }
    }
}

struct StreetName<'a>(Option<&'a str>);

impl fmt::Display for StreetName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.unwrap_or("an unnamed street"))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Start { street, meters } => {
                write!(f, "Head along {street} for {meters:.1} meters")
            }
            Instruction::Depart { street, meters } => write!(
                f,
                "Set off on {} and continue {meters:.1} meters",
                StreetName(street.as_deref())
            ),
            Instruction::Straight { street, meters } => write!(
                f,
                "Continue straight on {} for {meters:.1} meters",
                StreetName(street.as_deref())
            ),
            Instruction::Turn { direction, street, meters } => write!(
                f,
                "Turn {direction} onto {} and continue {meters:.1} meters",
                StreetName(street.as_deref())
            ),
            Instruction::RoundaboutExit { street, meters } => write!(
                f,
                "At the roundabout, take the exit onto {} and continue {meters:.1} meters",
                StreetName(street.as_deref())
            ),
            Instruction::Finish { street, meters } => {
                write!(f, "Continue on {street} for {meters:.1} meters")
            }
            Instruction::Arrive => f.write_str("You have arrived at your destination"),
        }
    }
}

// ── narrate ───────────────────────────────────────────────────────────────────

/// Describe every hop of `path`.  Paths with fewer than two vertices have no
/// hops and yield nothing.
pub fn narrate(path: &[Intersection], config: &NarratorConfig) -> Vec<Instruction> {
    let Some((first, second)) = path.first().zip(path.get(1)) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(path.len() - 1);
    out.push(Instruction::Depart {
        street: hop_street(first, second),
        meters: hop_meters(first, second),
    });

    for w in path.windows(3) {
        let (prev, curr, next) = (&w[0], &w[1], &w[2]);
        let street = hop_street(curr, next);
        let meters = hop_meters(curr, next);

        let step = if curr.street_count() > config.roundabout_threshold {
            Instruction::RoundaboutExit { street, meters }
        } else if prev.shared_street(curr) == curr.shared_street(next) {
            Instruction::Straight { street, meters }
        } else {
            let direction = config.turn_rule.direction(prev.coord(), curr.coord(), next.coord());
            Instruction::Turn { direction, street, meters }
        };
        out.push(step);
    }

    tracing::trace!(hops = out.len(), "path narrated");
    out
}

fn hop_street(a: &Intersection, b: &Intersection) -> Option<String> {
    a.shared_street(b).map(str::to_owned)
}

fn hop_meters(a: &Intersection, b: &Intersection) -> f64 {
    a.coord().distance_m(b.coord())
}
