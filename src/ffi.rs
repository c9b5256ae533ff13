//! C ABI for presentation layers.
//!
//! Every call takes the opaque handle returned by `Game_Create`. Rule
//! violations and bad addresses come back as `false` or `-1`; nothing
//! here panics across the boundary. Zone, suit and rank codes are the
//! raw encodings documented on `Zone`, `Suit` and `Rank`.
//!
//! The caller must not use a handle after `Game_Delete` and must not call
//! into one handle from two threads at once.

#![allow(non_snake_case)]

use std::panic;
use std::ptr;

use tracing::warn;

use crate::core::KlondikeConfig;
use crate::game::Game;
use crate::zones::{PileId, Zone};

/// Borrow the game behind a handle, logging null handles.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
unsafe fn handle<'a>(game: *mut Game, call: &'static str) -> Option<&'a mut Game> {
    let game = game.as_mut();
    if game.is_none() {
        warn!(call, "null game handle");
    }
    game
}

/// Allocate a fresh, empty game. Returns null if allocation fails.
#[no_mangle]
pub extern "C" fn Game_Create() -> *mut Game {
    match panic::catch_unwind(|| Box::new(Game::new(KlondikeConfig::default()))) {
        Ok(game) => Box::into_raw(game),
        Err(_) => {
            warn!("game allocation failed");
            ptr::null_mut()
        }
    }
}

/// Release a game. Null is ignored.
///
/// # Safety
/// `game` must be null or a pointer from `Game_Create` not yet deleted.
#[no_mangle]
pub unsafe extern "C" fn Game_Delete(game: *mut Game) {
    if !game.is_null() {
        drop(Box::from_raw(game));
    }
}

/// Shuffle and deal a new game.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_Start(game: *mut Game) {
    if let Some(game) = handle(game, "Game_Start") {
        game.start();
    }
}

/// Deal the game identified by `seed`.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_StartSeeded(game: *mut Game, seed: u64) {
    if let Some(game) = handle(game, "Game_StartSeeded") {
        game.start_with_seed(seed);
    }
}

/// Turn from the stock, or recycle the waste.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_DrawFromStock(game: *mut Game) {
    if let Some(game) = handle(game, "Game_DrawFromStock") {
        game.draw_from_stock();
    }
}

/// Reset to the current deal.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_RestartCurrent(game: *mut Game) {
    if let Some(game) = handle(game, "Game_RestartCurrent") {
        game.restart_current();
    }
}

/// Move `count` cards. Returns whether the move happened.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_Move(
    game: *mut Game,
    from_zone: i32,
    from_index: i32,
    to_zone: i32,
    to_index: i32,
    count: i32,
) -> bool {
    handle(game, "Game_Move")
        .is_some_and(|game| game.move_raw(from_zone, from_index, to_zone, to_index, count))
}

/// Number of cards in a pile, or -1 for a null handle or bad address.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_GetPileSize(game: *mut Game, zone: i32, index: i32) -> i32 {
    let Some(game) = handle(game, "Game_GetPileSize") else {
        return -1;
    };
    PileId::from_raw(zone, index)
        .ok()
        .and_then(|id| i32::try_from(game.layout().pile(id).len()).ok())
        .unwrap_or(-1)
}

/// Read one card. Writes the out-parameters and returns true when found;
/// leaves them untouched and returns false otherwise.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`. Each out
/// pointer must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn Game_GetCard(
    game: *mut Game,
    zone: i32,
    index: i32,
    position: i32,
    out_suit: *mut i32,
    out_rank: *mut i32,
    out_face_up: *mut bool,
) -> bool {
    let Some(game) = handle(game, "Game_GetCard") else {
        return false;
    };
    let Some(zone) = Zone::from_raw(zone) else {
        return false;
    };
    let (Ok(index), Ok(position)) = (usize::try_from(index), usize::try_from(position)) else {
        return false;
    };
    let Ok(card) = game.card_at(zone, index, position) else {
        return false;
    };

    if let Some(suit) = out_suit.as_mut() {
        *suit = card.suit.raw();
    }
    if let Some(rank) = out_rank.as_mut() {
        *rank = i32::from(card.rank.value());
    }
    if let Some(face_up) = out_face_up.as_mut() {
        *face_up = card.face_up;
    }
    true
}

/// Completed moves since the deal; 0 for a null handle.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_GetMoves(game: *mut Game) -> i32 {
    handle(game, "Game_GetMoves")
        .map_or(0, |game| i32::try_from(game.moves_count()).unwrap_or(i32::MAX))
}

/// Are all foundations complete?
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_IsWin(game: *mut Game) -> bool {
    handle(game, "Game_IsWin").is_some_and(|game| game.is_win())
}

/// Undo the last draw or move. Returns false when there is nothing to undo.
///
/// # Safety
/// `game` must be null or a live pointer from `Game_Create`.
#[no_mangle]
pub unsafe extern "C" fn Game_Undo(game: *mut Game) -> bool {
    handle(game, "Game_Undo").is_some_and(|game| game.undo().is_ok())
}
