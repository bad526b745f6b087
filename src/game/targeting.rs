//! Nearest-neighbour target lookups

use crate::model::{Game, ItemKind, LootBox, Unit};

/// Closest unit owned by another player
pub fn nearest_enemy<'a>(game: &'a Game, unit: &Unit) -> Option<&'a Unit> {
    game.units
        .iter()
        .filter(|other| other.player_id != unit.player_id)
        .min_by(|a, b| {
            unit.position
                .distance_sqr(a.position)
                .total_cmp(&unit.position.distance_sqr(b.position))
        })
}

/// Closest loot box holding an item of `kind`
pub fn nearest_loot<'a>(game: &'a Game, unit: &Unit, kind: ItemKind) -> Option<&'a LootBox> {
    game.loot_boxes
        .iter()
        .filter(|loot| loot.item.kind() == kind)
        .min_by(|a, b| {
            unit.position
                .distance_sqr(a.position)
                .total_cmp(&unit.position.distance_sqr(b.position))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Vec2, WeaponType};

    fn unit(id: i32, player_id: i32, x: f64, y: f64) -> Unit {
        Unit {
            id,
            player_id,
            health: 100,
            position: Vec2::new(x, y),
            size: Vec2::new(0.5, 2.0),
            weapon: None,
        }
    }

    #[test]
    fn picks_closest_enemy_only() {
        let me = unit(1, 1, 10.0, 10.0);
        let game = Game {
            units: vec![
                me.clone(),
                unit(2, 1, 10.5, 10.0),
                unit(3, 2, 20.0, 10.0),
                unit(4, 2, 13.0, 12.0),
            ],
            ..Game::default()
        };
        assert_eq!(nearest_enemy(&game, &me).map(|u| u.id), Some(4));
    }

    #[test]
    fn no_enemy_is_none() {
        let me = unit(1, 1, 10.0, 10.0);
        let game = Game {
            units: vec![me.clone(), unit(2, 1, 3.0, 3.0)],
            ..Game::default()
        };
        assert!(nearest_enemy(&game, &me).is_none());
    }

    #[test]
    fn loot_filtered_by_kind() {
        let me = unit(1, 1, 10.0, 10.0);
        let game = Game {
            loot_boxes: vec![
                LootBox {
                    position: Vec2::new(11.0, 10.0),
                    item: Item::Mine,
                },
                LootBox {
                    position: Vec2::new(30.0, 10.0),
                    item: Item::Weapon {
                        weapon_type: WeaponType::Pistol,
                    },
                },
                LootBox {
                    position: Vec2::new(15.0, 10.0),
                    item: Item::Weapon {
                        weapon_type: WeaponType::AssaultRifle,
                    },
                },
            ],
            ..Game::default()
        };

        let weapon = nearest_loot(&game, &me, ItemKind::Weapon).unwrap();
        assert_eq!(weapon.position, Vec2::new(15.0, 10.0));
        assert!(nearest_loot(&game, &me, ItemKind::HealthPack).is_none());
    }
}
