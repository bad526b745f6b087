//! Arena Bot - per-tick decision engine for a tile-based arena shooter
//!
//! The core answers two geometric questions every tick:
//! - is a wall between two points (`game::visibility`)
//! - is a bullet in flight about to hit a unit (`game::threat`)
//!
//! `game::strategy` turns those answers into a `UnitAction`, and `driver`
//! exchanges snapshots and actions as JSON lines.

pub mod config;
pub mod driver;
pub mod game;
pub mod model;
pub mod util;
