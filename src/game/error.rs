//! Decision errors

/// Faults in the incoming snapshot that abort a tick's decision
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Bullet #{bullet_index} was fired by unit {unit_id}, which is not in the snapshot")]
    MissingFirer { bullet_index: usize, unit_id: i32 },

    #[error("Unit {0} is not in the snapshot")]
    UnknownUnit(i32),
}
