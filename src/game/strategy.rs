//! Per-tick action assembly

use tracing::debug;

use crate::model::{Game, ItemKind, Tile, Unit, UnitAction, Vec2};

use super::error::DecisionError;
use super::targeting::{nearest_enemy, nearest_loot};
use super::threat::{ThreatClassifier, ThreatPolicy};
use super::visibility::VisibilityChecker;

/// Health fraction below which the unit goes for a health pack
pub const DEFAULT_HEAL_HEALTH_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyConfig {
    pub heal_health_ratio: f64,
    pub threat: ThreatPolicy,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            heal_health_ratio: DEFAULT_HEAL_HEALTH_RATIO,
            threat: ThreatPolicy::default(),
        }
    }
}

/// Decision context for one snapshot. Built fresh every tick.
pub struct Strategy<'a> {
    game: &'a Game,
    visibility: VisibilityChecker<'a>,
    threats: ThreatClassifier<'a>,
    config: StrategyConfig,
}

impl<'a> Strategy<'a> {
    pub fn new(game: &'a Game, config: StrategyConfig) -> Self {
        let visibility = VisibilityChecker::for_level(&game.level);
        Self {
            game,
            visibility,
            threats: ThreatClassifier::new(game, visibility, config.threat),
            config,
        }
    }

    /// Units controlled by `player_id`, in snapshot order
    pub fn controlled_units(&self, player_id: i32) -> impl Iterator<Item = &'a Unit> + 'a {
        let game = self.game;
        game.units
            .iter()
            .filter(move |unit| unit.player_id == player_id)
    }

    /// Action for the unit with id `unit_id`
    pub fn action_for(&self, unit_id: i32) -> Result<UnitAction, DecisionError> {
        let unit = self
            .game
            .unit(unit_id)
            .ok_or(DecisionError::UnknownUnit(unit_id))?;
        self.get_action(unit)
    }

    pub fn get_action(&self, unit: &Unit) -> Result<UnitAction, DecisionError> {
        let enemy = nearest_enemy(self.game, unit);
        let (target, mut jump) = self.movement_target(unit, enemy);

        let max_speed = self.game.properties.unit_max_horizontal_speed;
        let mut velocity = if unit.position.is_left_of(target) {
            max_speed
        } else {
            -max_speed
        };

        let (aim, shoot) = match enemy {
            Some(enemy) => (
                unit.position.aim_at(enemy.position),
                !self.visibility.has_wall_between(unit.position, enemy.position),
            ),
            None => (Vec2::ZERO, false),
        };

        // Drop-through follows the movement jump, not the dodge below
        let jump_down = !jump;

        let hit = self.threats.bullets_will_hit(unit)?;
        if hit.x {
            velocity /= 2.0;
            jump = true;
        }

        debug!(
            unit_id = unit.id,
            enemy_id = enemy.map(|e| e.id),
            shoot,
            jump,
            threatened = hit.any(),
            "Action chosen"
        );

        Ok(UnitAction {
            velocity,
            jump,
            jump_down,
            aim,
            shoot,
            swap_weapon: false,
            plant_mine: false,
        })
    }

    /// Where to walk this tick and whether a wall in the way calls for a jump
    fn movement_target(&self, unit: &Unit, enemy: Option<&Unit>) -> (Vec2, bool) {
        let health_pack = nearest_loot(self.game, unit, ItemKind::HealthPack);
        let max_health = f64::from(self.game.properties.unit_max_health);

        if let Some(pack) = health_pack {
            if f64::from(unit.health) < max_health * self.config.heal_health_ratio {
                return (pack.position, self.wall_ahead(unit, pack.position.x));
            }
        }

        if unit.weapon.is_none() {
            if let Some(weapon) = nearest_loot(self.game, unit, ItemKind::Weapon) {
                return (weapon.position, self.wall_ahead(unit, weapon.position.x));
            }
        }

        if let Some(enemy) = enemy {
            let pos = enemy.position;
            let x = if pos.is_left_of(unit.position) {
                pos.x * 2.0
            } else {
                pos.x / 2.0
            };
            return (Vec2::new(x, pos.y), self.wall_ahead(unit, pos.x));
        }

        (unit.position, false)
    }

    /// Whether the tile next to the unit, on the side of `toward_x`, is a wall
    fn wall_ahead(&self, unit: &Unit, toward_x: f64) -> bool {
        let pos = unit.position;
        let step = if toward_x > pos.x {
            1.0
        } else if toward_x < pos.x {
            -1.0
        } else {
            return false;
        };
        self.game.level.tile_at(Vec2::new(pos.x + step, pos.y)) == Some(Tile::Wall)
    }
}
