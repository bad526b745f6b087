//! Stdio driver: snapshot in, actions out, one line each per tick

pub mod protocol;

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::game::{Strategy, StrategyConfig};
use crate::model::{Game, UnitAction};
use crate::util::time::Timer;

use self::protocol::{ClientMsg, ServerMsg, UnitActionEntry};

/// Driver errors
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode actions: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Counters reported when the driver stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub skipped_lines: u64,
    pub failed_units: u64,
}

/// Build the actions for every unit `my_id` controls.
///
/// A unit whose decision fails gets the default (idle) action; the number
/// of such units is returned alongside.
pub fn decide(my_id: i32, game: &Game, config: StrategyConfig) -> (ClientMsg, u64) {
    let strategy = Strategy::new(game, config);
    let mut actions = Vec::new();
    let mut failed = 0;

    for unit in strategy.controlled_units(my_id) {
        let action = match strategy.get_action(unit) {
            Ok(action) => action,
            Err(e) => {
                error!(
                    tick = game.current_tick,
                    unit_id = unit.id,
                    error = %e,
                    "Decision failed, sending idle action"
                );
                failed += 1;
                UnitAction::default()
            }
        };
        actions.push(UnitActionEntry {
            unit_id: unit.id,
            action,
        });
    }

    let msg = ClientMsg::Actions {
        tick: game.current_tick,
        actions,
    };
    (msg, failed)
}

/// Serve ticks until `finish`, end of input, or `shutdown` resolves
pub async fn run<R, W, S>(
    reader: R,
    mut writer: W,
    config: &Config,
    shutdown: S,
) -> Result<RunSummary, DriverError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    let mut summary = RunSummary::default();
    let mut lines = reader.lines();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, stopping driver");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            info!("Input closed");
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let (my_id, game) = match serde_json::from_str::<ServerMsg>(&line) {
            Ok(ServerMsg::PlayerView { my_id, game }) => (my_id, game),
            Ok(ServerMsg::Finish) => {
                info!(ticks = summary.ticks, "Match finished");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse server message");
                summary.skipped_lines += 1;
                continue;
            }
        };

        let timer = Timer::new();
        let (msg, failed) = decide(my_id, &game, config.strategy);
        summary.failed_units += failed;
        summary.ticks += 1;

        if timer.exceeded(config.tick_budget) {
            warn!(
                tick = game.current_tick,
                elapsed_us = timer.elapsed_micros(),
                budget_ms = config.tick_budget.as_millis() as u64,
                "Tick over budget"
            );
        } else {
            debug!(
                tick = game.current_tick,
                elapsed_us = timer.elapsed_micros(),
                "Tick decided"
            );
        }

        let mut json = serde_json::to_vec(&msg)?;
        json.push(b'\n');
        writer.write_all(&json).await?;
        writer.flush().await?;
    }

    Ok(summary)
}
