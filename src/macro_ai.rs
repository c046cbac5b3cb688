use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::distance::manhattan;
use crate::game_interface::{Board, BotSnapshot, Position};
use crate::teleporter::TeleporterIndex;

/// Nominal value of the red-diamond reset button when it competes with real
/// diamonds in the ranking.
pub const RESET_BUTTON_POINTS: f64 = 0.75;

/// Point value of a red diamond. With a single inventory slot left we skip
/// these rather than risk wasting the slot.
pub const RED_DIAMOND_POINTS: f64 = 2.0;

/// Seconds of slack kept between the trip home and the countdown.
pub const HOME_TIME_BUFFER_SECS: i64 = 2;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed snapshot: diamond at ({x}, {y}) has no points property")]
    MissingPoints { x: i32, y: i32 },
}

/// A candidate target with its per-turn priority score. Lower scores better.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub position: Position,
    pub points: f64,
    pub score: f64,
}

// Macro-management: which tile is worth walking to this turn.
pub struct Macro {}

impl Default for Macro {
    fn default() -> Self {
        Self::new()
    }
}

impl Macro {
    pub fn new() -> Self {
        Macro {}
    }

    /// All candidate targets (diamonds, plus at most one reset button),
    /// sorted ascending by score. The sort is stable, so equal scores keep
    /// the board's enumeration order.
    pub fn rank_objectives(
        &self,
        current: Position,
        board: &Board,
        teleporters: &TeleporterIndex,
    ) -> Result<Vec<Objective>, Error> {
        let mut objectives = Vec::new();
        for diamond in board.diamonds() {
            let points = diamond
                .properties
                .as_ref()
                .and_then(|properties| properties.points)
                .ok_or(Error::MissingPoints {
                    x: diamond.position.x,
                    y: diamond.position.y,
                })?;
            objectives.push(Objective {
                position: diamond.position,
                points,
                score: 0.0,
            });
        }
        if let Some(button) = board.diamond_button() {
            objectives.push(Objective {
                position: button.position,
                points: RESET_BUTTON_POINTS,
                score: 0.0,
            });
        }
        for objective in &mut objectives {
            let direct = manhattan(current, objective.position);
            let shortcut = teleporters.teleported_distance(current, objective.position);
            let effective = direct.min(shortcut);
            // A zero-point objective is never worth walking to while anything
            // else is on the board.
            objective.score = if objective.points == 0.0 {
                f64::INFINITY
            } else {
                f64::from(effective) / objective.points
            };
        }
        objectives.sort_by(|a, b| a.score.total_cmp(&b.score));
        Ok(objectives)
    }

    /// Whether the countdown forces a run home: the better of the direct and
    /// teleported trips, plus the safety buffer, no longer fits on the clock.
    pub fn time_to_go_home(&self, bot: &BotSnapshot, teleporters: &TeleporterIndex) -> bool {
        let seconds_left = (bot.properties.milliseconds_left / 1000) as i64;
        let base = bot.properties.base;
        let direct = manhattan(bot.position, base);
        let shortcut = teleporters.teleported_distance(bot.position, base);
        let best_home = i64::from(direct.min(shortcut));
        best_home + HOME_TIME_BUFFER_SECS >= seconds_left
    }

    /// The one target for this turn: the base when forced (full inventory or
    /// the clock), otherwise the best-ranked objective, or `None` when the
    /// board offers nothing.
    ///
    /// Re-evaluated from scratch every turn, there is no sticky commitment to
    /// a previous decision.
    pub fn pick_target(
        &self,
        bot: &BotSnapshot,
        board: &Board,
        teleporters: &TeleporterIndex,
    ) -> Result<Option<Position>, Error> {
        let properties = &bot.properties;
        if properties.diamonds == properties.inventory_size {
            info!("[MACRO] Inventory full, heading home.");
            return Ok(Some(properties.base));
        }
        if self.time_to_go_home(bot, teleporters) {
            info!("[MACRO] Time to go home.");
            return Ok(Some(properties.base));
        }

        let mut objectives = self.rank_objectives(bot.position, board, teleporters)?;
        if properties.diamonds + 1 == properties.inventory_size {
            info!("[MACRO] One slot left, dropping red diamonds from the ranking.");
            objectives.retain(|objective| objective.points != RED_DIAMOND_POINTS);
        }
        info!(
            "[MACRO] {count} objectives: {ranked}",
            count = objectives.len(),
            ranked = objectives
                .iter()
                .map(|o| format!("{:?} ({} pts, score {:.2})", o.position, o.points, o.score))
                .join(", ")
        );
        Ok(objectives.first().map(|objective| objective.position))
    }
}
