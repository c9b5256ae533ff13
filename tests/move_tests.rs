//! Move and draw integration tests.
//!
//! Tables are built by hand so each rule can be hit directly. Every
//! rejection is checked to leave the table and counters untouched.

use klondike_engine::{
    Action, Card, DrawOutcome, EngineError, Game, IllegalMove, KlondikeConfig, Layout, PileId, Rank,
    Suit, Zone,
};

fn up(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap()).up()
}

fn down(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap())
}

/// Build a table with `build`, then put every other card in the stock.
fn table_with(config: KlondikeConfig, build: impl FnOnce(&mut Layout)) -> Game {
    let mut layout = Layout::empty();
    build(&mut layout);
    layout.fill_stock_with_remaining();
    Game::from_layout(config, layout).unwrap()
}

fn table(build: impl FnOnce(&mut Layout)) -> Game {
    table_with(KlondikeConfig::default(), build)
}

fn assert_rejected(game: &mut Game, from: PileId, to: PileId, count: usize, reason: IllegalMove) {
    let before = game.layout().clone();
    let moves = game.moves_count();

    assert_eq!(
        game.move_cards(from, to, count),
        Err(EngineError::IllegalMove(reason))
    );
    assert_eq!(game.layout(), &before);
    assert_eq!(game.moves_count(), moves);
}

// =============================================================================
// Foundation Tests
// =============================================================================

/// Test that an Ace on tableau 0 moves to a foundation.
#[test]
fn test_ace_to_foundation() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Diamonds, 1));
    });

    assert!(game.move_raw(0, 0, 1, 1, 1));

    assert_eq!(game.moves_count(), 1);
    assert_eq!(game.pile_size(Zone::Foundation, 1), Ok(1));
    assert_eq!(game.pile_size(Zone::Tableau, 0), Ok(0));
}

/// Test that an Ace may start any empty foundation, not only its suit's.
#[test]
fn test_ace_to_any_empty_foundation() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::WASTE).push(up(Suit::Spades, 1));
    });

    game.move_cards(PileId::WASTE, PileId::foundation(0), 1).unwrap();
    assert_eq!(
        game.card_at(Zone::Foundation, 0, 0).unwrap(),
        up(Suit::Spades, 1)
    );
}

/// Test that foundations build up by suit only.
#[test]
fn test_foundation_requires_suit_and_next_rank() {
    let mut game = table(|layout| {
        let foundation = layout.pile_mut(PileId::foundation(2));
        foundation.push(up(Suit::Clubs, 1));
        foundation.push(up(Suit::Clubs, 2));
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Spades, 3));
        layout.pile_mut(PileId::tableau(1)).push(up(Suit::Clubs, 4));
        layout.pile_mut(PileId::tableau(2)).push(up(Suit::Clubs, 3));
        layout.pile_mut(PileId::tableau(3)).push(up(Suit::Hearts, 2));
    });

    assert_rejected(&mut game, PileId::tableau(0), PileId::foundation(2), 1, IllegalMove::DoesNotStack);
    assert_rejected(&mut game, PileId::tableau(1), PileId::foundation(2), 1, IllegalMove::DoesNotStack);
    assert_rejected(&mut game, PileId::tableau(3), PileId::foundation(0), 1, IllegalMove::DoesNotStack);

    game.move_cards(PileId::tableau(2), PileId::foundation(2), 1).unwrap();
    game.move_cards(PileId::tableau(1), PileId::foundation(2), 1).unwrap();
    assert_eq!(game.pile_size(Zone::Foundation, 2), Ok(4));
}

/// Test that only one card at a time goes onto a foundation.
#[test]
fn test_foundation_takes_single_cards() {
    let mut game = table(|layout| {
        let pile = layout.pile_mut(PileId::tableau(0));
        pile.push(up(Suit::Hearts, 2));
        pile.push(up(Suit::Spades, 1));
    });

    assert_rejected(&mut game, PileId::tableau(0), PileId::foundation(0), 2, IllegalMove::SingleCardOnly);
}

/// Test that foundation cards never move between foundations.
#[test]
fn test_foundation_to_foundation_rejected() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::foundation(0)).push(up(Suit::Hearts, 1));
    });

    assert_rejected(
        &mut game,
        PileId::foundation(0),
        PileId::foundation(1),
        1,
        IllegalMove::DestinationNotAccepting(Zone::Foundation),
    );
}

/// Test that a foundation card may come back down by default.
#[test]
fn test_foundation_to_tableau() {
    let build = |layout: &mut Layout| {
        let foundation = layout.pile_mut(PileId::foundation(0));
        foundation.push(up(Suit::Hearts, 1));
        foundation.push(up(Suit::Hearts, 2));
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Spades, 3));
    };

    let mut game = table(build);
    game.move_cards(PileId::foundation(0), PileId::tableau(0), 1).unwrap();
    assert_eq!(game.pile_size(Zone::Tableau, 0), Ok(2));

    let mut locked = table_with(KlondikeConfig::new().without_foundation_to_tableau(), build);
    assert_rejected(
        &mut locked,
        PileId::foundation(0),
        PileId::tableau(0),
        1,
        IllegalMove::FoundationRetreatDisabled,
    );
}

// =============================================================================
// Tableau Tests
// =============================================================================

/// Test moving a valid run, which also reveals the card beneath.
#[test]
fn test_run_moves_and_reveals() {
    let mut game = table(|layout| {
        let source = layout.pile_mut(PileId::tableau(0));
        source.push(down(Suit::Clubs, 13));
        source.push(up(Suit::Hearts, 8));
        source.push(up(Suit::Clubs, 7));
        layout.pile_mut(PileId::tableau(1)).push(up(Suit::Spades, 9));
    });

    game.move_cards(PileId::tableau(0), PileId::tableau(1), 2).unwrap();

    assert_eq!(game.pile_size(Zone::Tableau, 1), Ok(3));
    assert_eq!(game.card_at(Zone::Tableau, 1, 1).unwrap(), up(Suit::Hearts, 8));
    assert_eq!(game.card_at(Zone::Tableau, 1, 2).unwrap(), up(Suit::Clubs, 7));
    assert_eq!(game.card_at(Zone::Tableau, 0, 0).unwrap(), up(Suit::Clubs, 13));
    assert_eq!(game.moves_count(), 1);
}

/// Test that a same-color sequence is not a movable run.
#[test]
fn test_broken_run_rejected() {
    let mut game = table(|layout| {
        let source = layout.pile_mut(PileId::tableau(0));
        source.push(up(Suit::Hearts, 8));
        source.push(up(Suit::Diamonds, 7));
        layout.pile_mut(PileId::tableau(1)).push(up(Suit::Spades, 9));
    });

    assert_rejected(&mut game, PileId::tableau(0), PileId::tableau(1), 2, IllegalMove::BrokenRun);
    assert!(!game.move_raw(0, 0, 0, 1, 2));
}

/// Test that face-down cards cannot be part of a move.
#[test]
fn test_face_down_card_rejected() {
    let mut game = table(|layout| {
        let source = layout.pile_mut(PileId::tableau(0));
        source.push(down(Suit::Hearts, 8));
        source.push(up(Suit::Clubs, 7));
        layout.pile_mut(PileId::tableau(1)).push(up(Suit::Spades, 9));
    });

    assert_rejected(&mut game, PileId::tableau(0), PileId::tableau(1), 2, IllegalMove::FaceDownCard);
}

/// Test stacking color and rank on the tableau.
#[test]
fn test_tableau_stacking_rules() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Hearts, 8));
        layout.pile_mut(PileId::tableau(1)).push(up(Suit::Diamonds, 9));
        layout.pile_mut(PileId::tableau(2)).push(up(Suit::Clubs, 10));
        layout.pile_mut(PileId::tableau(3)).push(up(Suit::Clubs, 9));
    });

    assert_rejected(&mut game, PileId::tableau(0), PileId::tableau(1), 1, IllegalMove::DoesNotStack);
    assert_rejected(&mut game, PileId::tableau(0), PileId::tableau(2), 1, IllegalMove::DoesNotStack);
    game.move_cards(PileId::tableau(0), PileId::tableau(3), 1).unwrap();
}

/// Test that only a King (or a King-led run) fills an empty pile.
#[test]
fn test_empty_tableau_needs_king() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Hearts, 12));
        let kings = layout.pile_mut(PileId::tableau(1));
        kings.push(up(Suit::Spades, 13));
        kings.push(up(Suit::Diamonds, 12));
    });

    assert_rejected(&mut game, PileId::tableau(0), PileId::tableau(6), 1, IllegalMove::NeedsKing);
    assert_rejected(&mut game, PileId::tableau(1), PileId::tableau(6), 1, IllegalMove::NeedsKing);
    game.move_cards(PileId::tableau(1), PileId::tableau(6), 2).unwrap();
    assert_eq!(game.pile_size(Zone::Tableau, 6), Ok(2));
}

/// Test requests for more cards than the pile holds.
#[test]
fn test_not_enough_cards() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Spades, 13));
    });

    assert_rejected(
        &mut game,
        PileId::tableau(0),
        PileId::tableau(1),
        3,
        IllegalMove::NotEnoughCards {
            requested: 3,
            available: 1,
        },
    );
}

// =============================================================================
// Waste and Stock Tests
// =============================================================================

/// Test waste to tableau, and that the waste gives one card at a time.
#[test]
fn test_waste_to_tableau() {
    let mut game = table(|layout| {
        let waste = layout.pile_mut(PileId::WASTE);
        waste.push(up(Suit::Clubs, 4));
        waste.push(up(Suit::Hearts, 12));
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Spades, 13));
    });

    assert_rejected(&mut game, PileId::WASTE, PileId::tableau(0), 2, IllegalMove::SingleCardOnly);
    game.move_cards(PileId::WASTE, PileId::tableau(0), 1).unwrap();
    assert_eq!(game.pile_size(Zone::Waste, 0), Ok(1));
}

/// Test that nothing moves onto the waste or stock, or out of the stock.
#[test]
fn test_waste_and_stock_are_closed() {
    let mut game = table(|layout| {
        layout.pile_mut(PileId::tableau(0)).push(up(Suit::Clubs, 4));
    });

    assert_rejected(
        &mut game,
        PileId::tableau(0),
        PileId::WASTE,
        1,
        IllegalMove::DestinationNotAccepting(Zone::Waste),
    );
    assert_rejected(
        &mut game,
        PileId::tableau(0),
        PileId::STOCK,
        1,
        IllegalMove::DestinationNotAccepting(Zone::Stock),
    );
    assert_rejected(
        &mut game,
        PileId::STOCK,
        PileId::tableau(1),
        1,
        IllegalMove::SourceNotMovable(Zone::Stock),
    );
}

/// Test that each draw turns the stock top face-up onto the waste.
#[test]
fn test_draw_turns_stock_top() {
    let mut game = Game::with_seed(KlondikeConfig::default(), 17);
    game.start();
    let top = *game.layout().pile(PileId::STOCK).top().unwrap();

    assert_eq!(game.draw_from_stock(), DrawOutcome::Drew { count: 1 });

    assert_eq!(game.pile_size(Zone::Stock, 0), Ok(23));
    assert_eq!(game.card_at(Zone::Waste, 0, 0).unwrap(), top.up());
    assert_eq!(game.moves_count(), 1);
}

/// Test draw-three, including a short final turn.
#[test]
fn test_draw_three() {
    let mut game = Game::with_seed(KlondikeConfig::new().with_draw_count(3), 17);
    game.start();

    for _ in 0..8 {
        assert_eq!(game.draw_from_stock(), DrawOutcome::Drew { count: 3 });
    }
    assert_eq!(game.pile_size(Zone::Stock, 0), Ok(0));
    assert_eq!(game.pile_size(Zone::Waste, 0), Ok(24));

    let mut short = table_with(KlondikeConfig::new().with_draw_count(3), |_| {});
    for _ in 0..17 {
        short.draw_from_stock();
    }
    assert_eq!(short.pile_size(Zone::Stock, 0), Ok(1));
    assert_eq!(short.draw_from_stock(), DrawOutcome::Drew { count: 1 });
}

/// Test that an empty stock recycles the waste reversed and face-down.
#[test]
fn test_recycle_reverses_waste() {
    let mut game = Game::with_seed(KlondikeConfig::default(), 23);
    game.start();
    for _ in 0..24 {
        game.draw_from_stock();
    }
    let waste: Vec<Card> = game.layout().pile(PileId::WASTE).iter().copied().collect();
    let moves = game.moves_count();

    assert_eq!(game.draw_from_stock(), DrawOutcome::Recycled);

    let stock: Vec<Card> = game.layout().pile(PileId::STOCK).iter().copied().collect();
    let expected: Vec<Card> = waste.iter().rev().map(|card| card.down()).collect();
    assert_eq!(stock, expected);
    assert_eq!(game.pile_size(Zone::Waste, 0), Ok(0));
    assert_eq!(game.moves_count(), moves + 1);
    assert_eq!(game.recycle_count(), 1);

    // The next draw turns the card that was drawn first
    game.draw_from_stock();
    assert_eq!(game.card_at(Zone::Waste, 0, 0).unwrap(), waste[0]);
}

/// Test that the recycle limit ends drawing.
#[test]
fn test_recycle_limit() {
    let mut game = Game::with_seed(KlondikeConfig::new().with_max_recycles(1), 29);
    game.start();

    for _ in 0..24 {
        game.draw_from_stock();
    }
    assert_eq!(game.draw_from_stock(), DrawOutcome::Recycled);
    for _ in 0..24 {
        game.draw_from_stock();
    }
    let moves = game.moves_count();
    let before = game.layout().clone();

    assert_eq!(game.draw_from_stock(), DrawOutcome::Exhausted);
    assert_eq!(game.moves_count(), moves);
    assert_eq!(game.layout(), &before);
    assert!(!game.legal_actions().contains(&Action::Draw));
}

/// Test that drawing with stock and waste both empty does nothing.
#[test]
fn test_draw_with_nothing_left() {
    let mut game = near_win();

    assert_eq!(game.draw_from_stock(), DrawOutcome::Empty);
    assert_eq!(game.moves_count(), 0);
    assert!(!game.can_undo());
}

// =============================================================================
// Win Tests
// =============================================================================

/// Foundations hold Ace through Queen of each suit; the Kings sit on the tableau.
fn near_win() -> Game {
    let mut layout = Layout::empty();
    for (index, suit) in Suit::ALL.into_iter().enumerate() {
        let foundation = layout.pile_mut(PileId::foundation(index));
        for rank in 1..=12 {
            foundation.push(up(suit, rank));
        }
        layout.pile_mut(PileId::tableau(index)).push(up(suit, 13));
    }
    Game::from_layout(KlondikeConfig::default(), layout).unwrap()
}

/// Test that the game is won once all 52 cards reach the foundations.
#[test]
fn test_win_after_last_kings() {
    let mut game = near_win();
    assert!(!game.is_win());

    for index in 0..3 {
        game.move_cards(PileId::tableau(index), PileId::foundation(index), 1).unwrap();
        assert!(!game.is_win());
    }
    assert!(game.move_raw(0, 3, 1, 3, 1));

    assert!(game.is_win());
    assert_eq!(game.moves_count(), 4);

    game.undo().unwrap();
    assert!(!game.is_win());
}

/// Test the legal actions offered near the end of a game.
#[test]
fn test_legal_actions_near_win() {
    let game = near_win();
    let actions = game.legal_actions();

    // Each King to its own foundation or any of the three empty piles, and
    // each foundation Queen onto the two opposite-color Kings
    assert_eq!(actions.len(), 4 + 4 * 3 + 4 * 2);
    for index in 0..4 {
        assert!(actions.contains(&Action::move_cards(
            PileId::tableau(index),
            PileId::foundation(index),
            1
        )));
    }
}
