//! Incoming-fire classification
//!
//! Bullets carry no heading, so travel direction is recovered from where the
//! firing unit stands relative to the bullet. A bullet threatens a unit when
//! the unit is downrange of it and no wall sits between them.

use tracing::{debug, trace};

use crate::model::{Bullet, Game, Unit, Vec2};

use super::error::DecisionError;
use super::geometry::{line_rect_intersect, Rect};
use super::visibility::VisibilityChecker;

/// Default per-axis proximity that counts as an imminent hit
pub const DEFAULT_THREAT_PROXIMITY: f64 = 10.0;

/// Horizontal travel direction inferred for a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    LeftToRight,
    RightToLeft,
    /// Firer and bullet share an X coordinate
    Indeterminate,
}

impl TravelDirection {
    pub fn infer(firer: Vec2, bullet: Vec2) -> Self {
        if firer.is_left_of(bullet) {
            Self::LeftToRight
        } else if firer.is_right_of(bullet) {
            Self::RightToLeft
        } else {
            Self::Indeterminate
        }
    }

    /// Whether `target` lies downrange of `bullet`
    pub fn is_downrange(&self, bullet: Vec2, target: Vec2) -> bool {
        match self {
            Self::LeftToRight => target.is_right_of(bullet),
            Self::RightToLeft => target.is_left_of(bullet),
            Self::Indeterminate => false,
        }
    }
}

/// How a threatening bullet is turned into a hit signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitTest {
    /// Per-axis distance to the bullet under the proximity threshold
    #[default]
    Proximity,
    /// Horizontal path from the firer to the arena edge crosses the hitbox
    Trajectory,
}

/// Which threatening bullets contribute to the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreatAggregation {
    /// The first threatening bullet in snapshot order decides
    #[default]
    FirstMatch,
    /// Per-axis OR over every threatening bullet
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatPolicy {
    pub proximity: f64,
    pub hit_test: HitTest,
    pub aggregation: ThreatAggregation,
}

impl Default for ThreatPolicy {
    fn default() -> Self {
        Self {
            proximity: DEFAULT_THREAT_PROXIMITY,
            hit_test: HitTest::default(),
            aggregation: ThreatAggregation::default(),
        }
    }
}

/// Per-axis "will be hit" signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitSignal {
    pub x: bool,
    pub y: bool,
}

impl HitSignal {
    pub const NONE: HitSignal = HitSignal { x: false, y: false };

    pub fn any(&self) -> bool {
        self.x || self.y
    }

    fn merge(self, other: HitSignal) -> HitSignal {
        HitSignal {
            x: self.x || other.x,
            y: self.y || other.y,
        }
    }
}

/// Classifies the live bullets of one snapshot against a target unit
pub struct ThreatClassifier<'a> {
    game: &'a Game,
    visibility: VisibilityChecker<'a>,
    policy: ThreatPolicy,
}

impl<'a> ThreatClassifier<'a> {
    pub fn new(game: &'a Game, visibility: VisibilityChecker<'a>, policy: ThreatPolicy) -> Self {
        Self {
            game,
            visibility,
            policy,
        }
    }

    /// Hit signal for `target` from the bullets currently in flight.
    ///
    /// Fails if a bullet's firer is absent from the snapshot.
    pub fn bullets_will_hit(&self, target: &Unit) -> Result<HitSignal, DecisionError> {
        let mut signal = HitSignal::NONE;

        for (index, bullet) in self.game.bullets.iter().enumerate() {
            let firer = self
                .game
                .unit(bullet.unit_id)
                .ok_or(DecisionError::MissingFirer {
                    bullet_index: index,
                    unit_id: bullet.unit_id,
                })?;

            let Some(direction) = self.threat_direction(firer, bullet, target) else {
                continue;
            };

            let hit = self.hit_signal(firer, bullet, target, direction);
            debug!(
                target_id = target.id,
                firer_id = firer.id,
                ?direction,
                hit_x = hit.x,
                hit_y = hit.y,
                "Bullet on course"
            );

            match self.policy.aggregation {
                ThreatAggregation::FirstMatch => return Ok(hit),
                ThreatAggregation::Any => signal = signal.merge(hit),
            }
        }

        Ok(signal)
    }

    /// Direction of a bullet that is aimed across `target` with a clear path,
    /// `None` if it poses no threat
    fn threat_direction(
        &self,
        firer: &Unit,
        bullet: &Bullet,
        target: &Unit,
    ) -> Option<TravelDirection> {
        let direction = TravelDirection::infer(firer.position, bullet.position);
        if direction == TravelDirection::Indeterminate {
            trace!(firer_id = firer.id, "Bullet direction indeterminate, skipping");
            return None;
        }

        if !direction.is_downrange(bullet.position, target.position) {
            return None;
        }

        if self
            .visibility
            .has_wall_between(target.position, bullet.position)
        {
            return None;
        }

        Some(direction)
    }

    fn hit_signal(
        &self,
        firer: &Unit,
        bullet: &Bullet,
        target: &Unit,
        direction: TravelDirection,
    ) -> HitSignal {
        match self.policy.hit_test {
            HitTest::Proximity => HitSignal {
                x: (target.position.x - bullet.position.x).abs() < self.policy.proximity,
                y: (target.position.y - bullet.position.y).abs() < self.policy.proximity,
            },
            HitTest::Trajectory => {
                let (start, end) = self.flight_path(firer, bullet, direction);
                let hit = line_rect_intersect(start, end, &Rect::of_unit(target));
                HitSignal { x: hit, y: hit }
            }
        }
    }

    /// Horizontal path at the bullet's height, from the firer to beyond the
    /// arena edge in the direction of travel
    fn flight_path(
        &self,
        firer: &Unit,
        bullet: &Bullet,
        direction: TravelDirection,
    ) -> (Vec2, Vec2) {
        let width = self.visibility.dimensions().width as f64;
        let end_x = match direction {
            TravelDirection::RightToLeft => -width,
            _ => width,
        };
        (firer.position, Vec2::new(end_x, bullet.position.y))
    }
}
