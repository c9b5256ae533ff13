//! Engine error types.
//!
//! Every rule violation is an expected, recoverable outcome: the engine
//! reports it and leaves state untouched. Callers at the C ABI see these
//! collapsed to `false` / `-1`.

use std::fmt;

use crate::zones::{PileId, Zone};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// Requested zero cards.
    ZeroCount,
    /// Source and destination are the same pile.
    SamePile,
    /// Cards never leave this zone through a move.
    SourceNotMovable(Zone),
    /// Cards are never placed on this zone by a move.
    DestinationNotAccepting(Zone),
    /// Only one card may move from this source or onto this destination.
    SingleCardOnly,
    /// The source holds fewer cards than requested.
    NotEnoughCards { requested: usize, available: usize },
    /// A card in the moved group is face-down.
    FaceDownCard,
    /// The moved group is not a descending, alternating-color run.
    BrokenRun,
    /// Only a King may start an empty tableau pile.
    NeedsKing,
    /// The moved card does not fit on the destination's top card.
    DoesNotStack,
    /// Foundation cards are locked by configuration.
    FoundationRetreatDisabled,
    /// Stock and waste are empty, or the recycle limit is spent.
    NothingToDraw,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::ZeroCount => write!(f, "card count must be positive"),
            IllegalMove::SamePile => write!(f, "source and destination are the same pile"),
            IllegalMove::SourceNotMovable(zone) => write!(f, "cannot move cards out of {zone}"),
            IllegalMove::DestinationNotAccepting(zone) => {
                write!(f, "cannot move cards onto {zone}")
            }
            IllegalMove::SingleCardOnly => write!(f, "only a single card may move here"),
            IllegalMove::NotEnoughCards {
                requested,
                available,
            } => write!(f, "requested {requested} cards but only {available} available"),
            IllegalMove::FaceDownCard => write!(f, "face-down cards cannot move"),
            IllegalMove::BrokenRun => {
                write!(f, "cards must form a descending run of alternating colors")
            }
            IllegalMove::NeedsKing => write!(f, "only a King may fill an empty tableau pile"),
            IllegalMove::DoesNotStack => write!(f, "card does not stack on the destination"),
            IllegalMove::FoundationRetreatDisabled => {
                write!(f, "moving cards off a foundation is disabled")
            }
            IllegalMove::NothingToDraw => write!(f, "nothing left to draw"),
        }
    }
}

/// Errors reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Raw zone code outside 0..=3.
    InvalidZone { zone: i32 },
    /// Pile index outside the zone's range.
    InvalidIndex { zone: Zone, index: i64 },
    /// Card position outside the pile's current size.
    PositionOutOfRange {
        pile: PileId,
        position: usize,
        size: usize,
    },
    /// The requested move breaks the rules.
    IllegalMove(IllegalMove),
    /// Nothing to undo.
    EmptyHistory,
    /// A layout breaks the card-conservation or pile invariants.
    CorruptState(String),
    /// Snapshot encoding failed.
    Encode(String),
    /// Snapshot decoding failed (corrupt or foreign bytes).
    Decode(String),
    /// Snapshot was written by an unknown format version.
    VersionMismatch { expected: u32, found: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidZone { zone } => write!(f, "invalid zone code {zone}"),
            EngineError::InvalidIndex { zone, index } => {
                write!(f, "invalid pile index {index} for {zone}")
            }
            EngineError::PositionOutOfRange {
                pile,
                position,
                size,
            } => write!(f, "no card at position {position} in {pile} (size {size})"),
            EngineError::IllegalMove(reason) => write!(f, "illegal move: {reason}"),
            EngineError::EmptyHistory => write!(f, "nothing to undo"),
            EngineError::CorruptState(msg) => write!(f, "corrupt state: {msg}"),
            EngineError::Encode(msg) => write!(f, "encoding error: {msg}"),
            EngineError::Decode(msg) => write!(f, "decoding error: {msg}"),
            EngineError::VersionMismatch { expected, found } => write!(
                f,
                "version mismatch: snapshot is v{found}, this build reads v{expected}"
            ),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<IllegalMove> for EngineError {
    fn from(reason: IllegalMove) -> Self {
        EngineError::IllegalMove(reason)
    }
}
