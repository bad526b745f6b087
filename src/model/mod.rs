//! Game snapshot types
//! These mirror the per-tick state delivered by the game and are read-only
//! for the duration of a decision.

pub mod vec2;

pub use vec2::Vec2;

use serde::{Deserialize, Serialize};

/// Tile kinds of the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    Empty,
    Wall,
    Platform,
    Ladder,
    JumpPad,
}

impl Default for Tile {
    fn default() -> Self {
        Self::Empty
    }
}

/// Size of the tile grid, discovered once from the level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    /// Whether the integer cell lies inside the grid
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }
}

/// Level layout, column-major: `tiles[x][y]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub tiles: Vec<Vec<Tile>>,
}

impl Level {
    pub fn new(tiles: Vec<Vec<Tile>>) -> Self {
        Self { tiles }
    }

    /// An all-empty level of the given size
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            tiles: vec![vec![Tile::Empty; height]; width],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions {
            width: self.tiles.len(),
            height: self.tiles.first().map_or(0, Vec::len),
        }
    }

    /// Tile at an integer cell, `None` outside the grid
    pub fn cell(&self, x: i64, y: i64) -> Option<Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.tiles
            .get(x as usize)
            .and_then(|column| column.get(y as usize))
            .copied()
    }

    /// Tile under a world-space point. Coordinates truncate toward zero,
    /// so anything in (-1, 0) lands in row/column 0.
    pub fn tile_at(&self, point: Vec2) -> Option<Tile> {
        if !point.is_finite() {
            return None;
        }
        let (x, y) = (point.x.trunc(), point.y.trunc());
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.cell(x as i64, y as i64)
    }

    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        if let Some(slot) = self.tiles.get_mut(x).and_then(|column| column.get_mut(y)) {
            *slot = tile;
        }
    }
}

/// Weapon kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Pistol,
    AssaultRifle,
    RocketLauncher,
}

/// Weapon currently held by a unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub typ: WeaponType,
}

/// A unit (agent) on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i32,
    pub player_id: i32,
    pub health: i32,
    pub position: Vec2,
    /// Horizontal half-extent and height of the hitbox
    pub size: Vec2,
    #[serde(default)]
    pub weapon: Option<Weapon>,
}

/// A live projectile. Carries no heading; see `game::threat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub unit_id: i32,
    pub player_id: i32,
    pub position: Vec2,
}

/// Item inside a loot box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    HealthPack { health: i32 },
    Weapon { weapon_type: WeaponType },
    Mine,
}

/// Discriminant used by loot lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    HealthPack,
    Weapon,
    Mine,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::HealthPack { .. } => ItemKind::HealthPack,
            Item::Weapon { .. } => ItemKind::Weapon,
            Item::Mine => ItemKind::Mine,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootBox {
    pub position: Vec2,
    pub item: Item,
}

/// Global game properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub unit_max_health: i32,
    pub unit_max_horizontal_speed: f64,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            unit_max_health: 100,
            unit_max_horizontal_speed: 10.0,
        }
    }
}

/// Complete per-tick snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub current_tick: u64,
    #[serde(default)]
    pub properties: Properties,
    pub level: Level,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
    #[serde(default)]
    pub loot_boxes: Vec<LootBox>,
}

impl Game {
    pub fn unit(&self, id: i32) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }
}

/// Action for one unit for one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitAction {
    pub velocity: f64,
    pub jump: bool,
    pub jump_down: bool,
    pub aim: Vec2,
    pub shoot: bool,
    pub swap_weapon: bool,
    pub plant_mine: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_lookup_is_bounds_checked() {
        let mut level = Level::empty(3, 2);
        level.set(2, 1, Tile::Wall);

        assert_eq!(level.tile_at(Vec2::new(2.7, 1.2)), Some(Tile::Wall));
        assert_eq!(level.tile_at(Vec2::new(0.5, 0.5)), Some(Tile::Empty));
        assert_eq!(level.tile_at(Vec2::new(3.0, 0.0)), None);
        assert_eq!(level.tile_at(Vec2::new(0.0, 2.0)), None);
        assert_eq!(level.tile_at(Vec2::new(-1.0, 0.0)), None);
        assert_eq!(level.tile_at(Vec2::new(0.5, -1.5)), None);
        assert_eq!(level.tile_at(Vec2::new(-0.5, 0.0)), Some(Tile::Empty));
        assert_eq!(level.tile_at(Vec2::new(2.5, -0.5)), Some(Tile::Empty));
        assert_eq!(level.tile_at(Vec2::new(2.5, 1.0)), Some(Tile::Wall));
        assert_eq!(level.tile_at(Vec2::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn dimensions_follow_level() {
        let level = Level::empty(40, 30);
        let dims = level.dimensions();
        assert_eq!(dims, GridDimensions { width: 40, height: 30 });
        assert!(dims.contains(39, 29));
        assert!(!dims.contains(40, 0));
        assert!(!dims.contains(-1, 0));
        assert_eq!(Level::default().dimensions(), GridDimensions { width: 0, height: 0 });
    }

    #[test]
    fn loot_item_deserializes_tagged() {
        let item: Item = serde_json::from_str(r#"{"type":"weapon","weapon_type":"rocket_launcher"}"#)
            .unwrap();
        assert_eq!(item.kind(), ItemKind::Weapon);

        let item: Item = serde_json::from_str(r#"{"type":"health_pack","health":50}"#).unwrap();
        assert_eq!(item, Item::HealthPack { health: 50 });
    }
}
