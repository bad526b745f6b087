//! Decision engine: visibility, threat classification and action assembly

pub mod error;
pub mod geometry;
pub mod strategy;
pub mod targeting;
pub mod threat;
pub mod visibility;

pub use error::DecisionError;
pub use strategy::{Strategy, StrategyConfig};
pub use threat::{HitSignal, HitTest, ThreatAggregation, ThreatClassifier, ThreatPolicy, TravelDirection};
pub use visibility::VisibilityChecker;
