//! Save and restore a whole session.
//!
//! Wire format:
//!   [0..4]  Magic bytes "KLDK"
//!   [4..8]  Snapshot format version (u32, little-endian)
//!   [8..]   bincode-encoded `GameSnapshot`
//!
//! Import checks magic and version before decoding, then validates both
//! layouts, so a foreign or hand-edited blob can never install a table that
//! breaks card conservation.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::session::Game;
use crate::core::config::KlondikeConfig;
use crate::core::error::EngineError;
use crate::core::rng::{GameRng, GameRngState};
use crate::history::History;
use crate::rules::MoveValidator;
use crate::zones::Layout;

/// Magic bytes identifying a snapshot.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"KLDK";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

const HEADER_SIZE: usize = 8;

/// Everything needed to resume a session exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: KlondikeConfig,
    pub layout: Layout,
    pub initial: Layout,
    pub history: History,
    pub moves: u32,
    pub recycles: u32,
    pub rng: GameRngState,
    pub deal_seed: Option<u64>,
}

impl GameSnapshot {
    /// Capture a session.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        Self {
            config: game.config().clone(),
            layout: game.layout.clone(),
            initial: game.initial.clone(),
            history: game.history.clone(),
            moves: game.moves,
            recycles: game.recycles,
            rng: game.rng.state(),
            deal_seed: game.deal_seed,
        }
    }

    /// Check the snapshot can back a live session.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=3).contains(&self.config.draw_count) {
            return Err(EngineError::CorruptState(format!(
                "draw count {} outside 1-3",
                self.config.draw_count
            )));
        }
        let unstarted = self.initial.card_count() == 0;
        if unstarted {
            if self.layout != self.initial || !self.history.is_empty() {
                return Err(EngineError::CorruptState(
                    "cards on the table before any deal".to_string(),
                ));
            }
        } else {
            self.layout.validate()?;
            self.initial.validate()?;
        }
        if self.history.len() != self.moves as usize {
            return Err(EngineError::CorruptState(format!(
                "{} history entries for {} moves",
                self.history.len(),
                self.moves
            )));
        }
        let recycled = self.history.entries().filter(|entry| entry.recycled).count();
        if recycled != self.recycles as usize {
            return Err(EngineError::CorruptState(format!(
                "{recycled} recycles in history, counter says {}",
                self.recycles
            )));
        }
        self.check_history_unwinds()
    }

    /// Undo every entry on a scratch table. Each step must leave a valid
    /// table, and the last must land on the initial deal.
    fn check_history_unwinds(&self) -> Result<(), EngineError> {
        let mut scratch = self.layout.clone();
        for (depth, entry) in self.history.entries().rev().enumerate() {
            entry.clone().restore(&mut scratch);
            scratch.validate().map_err(|err| {
                EngineError::CorruptState(format!("history entry {depth} from the top: {err}"))
            })?;
        }
        if scratch != self.initial {
            return Err(EngineError::CorruptState(
                "history does not unwind to the initial deal".to_string(),
            ));
        }
        Ok(())
    }

    /// Turn the snapshot back into a session.
    pub fn restore(self) -> Result<Game, EngineError> {
        self.validate()?;
        Ok(Game {
            rules: MoveValidator::new(self.config),
            layout: self.layout,
            initial: self.initial,
            history: self.history,
            moves: self.moves,
            recycles: self.recycles,
            rng: GameRng::from_state(&self.rng),
            deal_seed: self.deal_seed,
        })
    }

    /// Encode with the snapshot header.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        let payload = bincode::serialize(self).map_err(|e| EngineError::Encode(e.to_string()))?;
        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&SNAPSHOT_MAGIC);
        out.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Decode bytes written by `to_bytes`. Does not validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        if bytes.len() < HEADER_SIZE {
            return Err(EngineError::Decode(format!(
                "snapshot is {} bytes, header needs {HEADER_SIZE}",
                bytes.len()
            )));
        }
        let (header, payload) = bytes.split_at(HEADER_SIZE);
        if header[..4] != SNAPSHOT_MAGIC {
            return Err(EngineError::Decode("missing snapshot magic".to_string()));
        }
        let mut version = [0u8; 4];
        version.copy_from_slice(&header[4..]);
        let found = u32::from_le_bytes(version);
        if found != SNAPSHOT_VERSION {
            return Err(EngineError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                found,
            });
        }
        bincode::deserialize(payload).map_err(|e| EngineError::Decode(e.to_string()))
    }
}

impl Game {
    /// Serialize the whole session.
    pub fn export(&self) -> Result<Vec<u8>, EngineError> {
        GameSnapshot::capture(self).to_bytes()
    }

    /// Rebuild a session from `export` output.
    #[instrument(level = "debug", skip(bytes), fields(len = bytes.len()))]
    pub fn import(bytes: &[u8]) -> Result<Self, EngineError> {
        let result = GameSnapshot::from_bytes(bytes).and_then(GameSnapshot::restore);
        if let Err(err) = &result {
            warn!(%err, "snapshot import failed");
        }
        result
    }
}
