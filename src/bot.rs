use log::info;
use std::time::Instant;
use thiserror::Error;

use crate::game_interface::{GameTurn, Move};
use crate::macro_ai::{self, Macro};
use crate::micro_ai::Micro;
use crate::teleporter::TeleporterIndex;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Snapshot(#[from] macro_ai::Error),
}

pub struct Bot {
    ai_macro: Macro,
    ai_micro: Micro,
    // The only state carried across turns; everything else is rebuilt from
    // the snapshots.
    teleporters: TeleporterIndex,
    just_teleported: bool,
    teleported_at: Option<Instant>,
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Bot {
    pub fn new(seed: Option<u64>) -> Self {
        info!("Initializing bot");
        Bot {
            ai_macro: Macro::new(),
            ai_micro: Micro::new(seed),
            teleporters: TeleporterIndex::default(),
            just_teleported: false,
            teleported_at: None,
        }
    }

    /// Make the next move according to the current game turn.
    pub fn get_next_move(&mut self, turn: &GameTurn) -> Result<Move, Error> {
        let start = Instant::now();
        let bot = &turn.bot;
        info!(
            "Turn {turn}, pos: {pos:?}, inventory: {inventory}/{capacity}, {ms}ms left",
            turn = turn.turn,
            pos = bot.position,
            inventory = bot.properties.diamonds,
            capacity = bot.properties.inventory_size,
            ms = bot.properties.milliseconds_left
        );

        self.teleporters = TeleporterIndex::from_board(&turn.board);
        if self.just_teleported {
            // Bookkeeping only, the scoring doesn't care.
            if let Some(at) = self.teleported_at.take() {
                info!("Teleported {elapsed:?} ago", elapsed = at.elapsed());
            }
            self.just_teleported = false;
        }

        let target = self
            .ai_macro
            .pick_target(bot, &turn.board, &self.teleporters)?;
        info!(
            "Teleporters: {tps:?}, target: {target:?}",
            tps = self.teleporters.positions()
        );

        let resolution = self
            .ai_micro
            .get_move(bot.position, target, &self.teleporters);
        if resolution.entered_teleporter {
            self.just_teleported = true;
            self.teleported_at = Some(Instant::now());
        }

        info!("Turn overall time: {:?}", start.elapsed());
        Ok(resolution.step)
    }

    pub fn is_done(&self, turn: &GameTurn) -> bool {
        turn.is_over
    }
}
