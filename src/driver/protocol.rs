//! Stdio protocol message definitions
//! One JSON object per line in each direction.

use serde::{Deserialize, Serialize};

use crate::model::{Game, UnitAction};

/// Messages read from the game side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Snapshot for this tick, seen by player `my_id`
    PlayerView { my_id: i32, game: Game },

    /// Match is over, stop reading
    Finish,
}

/// Messages written back to the game side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// Actions for every controlled unit, in snapshot order
    Actions {
        tick: u64,
        actions: Vec<UnitActionEntry>,
    },
}

/// Action addressed to one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitActionEntry {
    pub unit_id: i32,
    pub action: UnitAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_player_view() {
        let line = r#"{"type":"player_view","my_id":1,"game":{
            "current_tick":3,
            "level":{"tiles":[["empty","wall"],["empty","empty"]]},
            "units":[{"id":5,"player_id":1,"health":100,
                      "position":{"x":0.5,"y":0.0},"size":{"x":0.45,"y":1.8}}]
        }}"#;
        let ServerMsg::PlayerView { my_id, game } = serde_json::from_str::<ServerMsg>(line).unwrap() else {
            panic!("expected a player view");
        };
        assert_eq!(my_id, 1);
        assert_eq!(game.current_tick, 3);
        assert_eq!(game.level.dimensions().width, 2);
        assert_eq!(game.units[0].weapon, None);
        assert!(game.bullets.is_empty());
        assert_eq!(game.properties.unit_max_health, 100);
    }

    #[test]
    fn actions_read_back_after_writing() {
        let msg = ClientMsg::Actions {
            tick: 12,
            actions: vec![UnitActionEntry {
                unit_id: 4,
                action: UnitAction {
                    velocity: -5.0,
                    jump: true,
                    shoot: true,
                    ..UnitAction::default()
                },
            }],
        };
        let line = serde_json::to_string(&msg).unwrap();
        assert_eq!(serde_json::from_str::<ClientMsg>(&line).unwrap(), msg);
    }

    #[test]
    fn parses_finish() {
        let msg: ServerMsg = serde_json::from_str(r#"{"type":"finish"}"#).unwrap();
        assert!(matches!(msg, ServerMsg::Finish));
    }
}
