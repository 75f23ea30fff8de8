//! Card, deck, hand, bet and player tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use suitjack::{
    BUST_SCORE, Bet, BetError, BetKind, BetResult, Card, DECK_SIZE, Deck, DeckError, ErrorKind,
    Hand, Player, PlayerError, Rank, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        assert!(hand.deal(c), "{c} should not bust");
    }
    hand
}

fn player(points: usize) -> Player {
    Player::new("P1", "Alice", points).unwrap()
}

#[test]
fn cards_order_by_suit_then_rank() {
    assert!(card(Suit::Clubs, Rank::King) < card(Suit::Diamonds, Rank::Ace));
    assert!(card(Suit::Hearts, Rank::Two) < card(Suit::Hearts, Rank::Three));
    assert!(card(Suit::Spades, Rank::Ace) > card(Suit::Hearts, Rank::King));
    assert_eq!(card(Suit::Hearts, Rank::Queen), card(Suit::Hearts, Rank::Queen));

    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Seven.value(), 7);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "Ace of Spades");
    assert_eq!(card(Suit::Clubs, Rank::Ten).to_string(), "10 of Clubs");
}

#[test]
fn sorted_deck_is_canonical() {
    let deck = Deck::sorted();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut expected = deck.cards().to_vec();
    expected.sort();
    assert_eq!(deck.cards(), expected.as_slice());
    assert_eq!(deck.cards()[0], card(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.cards()[DECK_SIZE - 1], card(Suit::Spades, Rank::King));
}

#[test]
fn shuffled_deck_holds_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let deck = Deck::shuffled(&mut rng);

    assert_eq!(deck.remaining(), DECK_SIZE);
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let mut sorted = deck.cards().to_vec();
    sorted.sort();
    assert_eq!(sorted.as_slice(), Deck::sorted().cards());
    assert_ne!(deck.cards(), Deck::sorted().cards());
}

#[test]
fn shuffles_are_reproducible_from_the_seed() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(first, second);
}

#[test]
fn deck_draws_until_empty() {
    let mut deck = Deck::sorted();
    assert_eq!(deck.draw(), Ok(card(Suit::Spades, Rank::King)));
    assert_eq!(deck.remaining(), DECK_SIZE - 1);

    for _ in 1..DECK_SIZE {
        deck.draw().unwrap();
    }
    assert!(deck.is_empty());

    let err = deck.draw().unwrap_err();
    assert_eq!(err, DeckError::Empty);
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

#[test]
fn hand_keeps_cards_up_to_the_bust_score() {
    let cards = [
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Five),
    ];
    let hand = hand_of(&cards);

    assert_eq!(hand.score(), BUST_SCORE);
    assert_eq!(hand.len(), 4);
    assert_eq!(hand.cards(), &cards);
    assert_eq!(hand.suit_count(Suit::Hearts), 2);
    assert_eq!(hand.suit_count(Suit::Diamonds), 0);
}

#[test]
fn busting_card_is_rejected() {
    let mut hand = hand_of(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Nine),
    ]);

    assert!(!hand.deal(card(Suit::Spades, Rank::Three)));
    assert_eq!(hand.score(), 19);
    assert_eq!(hand.len(), 2);

    assert!(hand.deal(card(Suit::Spades, Rank::Two)));
    assert_eq!(hand.score(), 21);
}

#[test]
fn hand_reset_and_display() {
    let mut hand = hand_of(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Queen),
    ]);
    assert_eq!(
        hand.to_string(),
        "Hand of 2 cards [Ace of Hearts, Queen of Diamonds] Score: 11"
    );

    hand.reset();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);
    assert_eq!(hand.to_string(), "Empty Hand");
}

#[test]
fn bet_construction_is_validated() {
    let alice = player(50);

    assert_eq!(Bet::on_score(&alice, 0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        Bet::on_suit(&alice, 51, Suit::Hearts).unwrap_err(),
        BetError::InsufficientPoints
    );
    assert_eq!(BetError::ZeroBet.kind(), ErrorKind::InvalidArgument);

    let bet = Bet::on_suit(&alice, 50, Suit::Hearts).unwrap();
    assert_eq!(bet.player_id(), "P1");
    assert_eq!(bet.kind(), BetKind::Suit(Suit::Hearts));
    assert_eq!(bet.suit(), Some(Suit::Hearts));
    assert_eq!(bet.result(), BetResult::Undetermined);
    assert_eq!(bet.outcome(), 0);
    // Constructing a bet does not touch the balance.
    assert_eq!(alice.points(), 50);
}

#[test]
fn score_bet_compares_scores() {
    let alice = player(100);
    let fifteen = hand_of(&[card(Suit::Hearts, Rank::King), card(Suit::Clubs, Rank::Five)]);
    let eighteen = hand_of(&[card(Suit::Spades, Rank::King), card(Suit::Clubs, Rank::Eight)]);
    let nineteen = hand_of(&[card(Suit::Spades, Rank::Ten), card(Suit::Clubs, Rank::Nine)]);
    let twenty = hand_of(&[card(Suit::Hearts, Rank::Queen), card(Suit::Hearts, Rank::Jack)]);

    let mut bet = Bet::on_score(&alice, 25).unwrap();
    assert_eq!(bet.multiplier(), 2);

    assert_eq!(bet.finalize(&fifteen, &eighteen), BetResult::Loss);
    assert_eq!(bet.outcome(), -25);

    assert_eq!(bet.finalize(&eighteen, &eighteen), BetResult::Draw);
    assert_eq!(bet.outcome(), 0);

    assert_eq!(bet.finalize(&twenty, &nineteen), BetResult::Win);
    assert_eq!(bet.outcome(), 50);
    assert_eq!(bet.result(), BetResult::Win);
}

#[test]
fn suit_bet_needs_strictly_more_cards_of_the_suit() {
    let alice = player(100);
    let mut bet = Bet::on_suit(&alice, 10, Suit::Hearts).unwrap();
    assert_eq!(bet.multiplier(), 4);

    let two_hearts = hand_of(&[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Three)]);
    let other_two = hand_of(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Spades, Rank::Ace),
    ]);
    assert_eq!(bet.finalize(&two_hearts, &other_two), BetResult::Loss);
    assert_eq!(bet.outcome(), -10);

    let three_hearts = hand_of(&[
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Six),
    ]);
    let one_heart = hand_of(&[card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::King)]);
    assert_eq!(bet.finalize(&three_hearts, &one_heart), BetResult::Win);
    assert_eq!(bet.outcome(), 40);
}

#[test]
fn outcome_for_each_result_and_ordering() {
    let alice = player(100);
    let score = Bet::on_score(&alice, 10).unwrap();
    let suit = Bet::on_suit(&alice, 10, Suit::Clubs).unwrap();

    assert_eq!(score.outcome_for(BetResult::Win), 20);
    assert_eq!(suit.outcome_for(BetResult::Win), 40);
    assert_eq!(suit.outcome_for(BetResult::Loss), -10);
    assert_eq!(suit.outcome_for(BetResult::Draw), 0);
    assert_eq!(suit.outcome_for(BetResult::Undetermined), 0);

    let mut winner = score.clone();
    let high = hand_of(&[card(Suit::Hearts, Rank::King)]);
    winner.finalize(&high, &Hand::new());
    assert_eq!(score.cmp_outcome(&winner), std::cmp::Ordering::Less);
    assert_eq!(winner.cmp_outcome(&winner), std::cmp::Ordering::Equal);

    assert_eq!(score.to_string(), "Score Bet for 10");
    assert_eq!(suit.to_string(), "Suit Bet for 10 on Clubs");
    assert_eq!(BetResult::Loss.to_string(), "Player Lose");
}

#[test]
fn player_creation_is_validated() {
    assert_eq!(Player::new("", "Alice", 10).unwrap_err(), PlayerError::EmptyId);
    assert_eq!(Player::new("P1", "", 10).unwrap_err(), PlayerError::EmptyName);
    assert_eq!(Player::new("P1", "Alice", 0).unwrap_err(), PlayerError::NoPoints);
    assert_eq!(PlayerError::EmptyId.kind(), ErrorKind::MissingArgument);
    assert_eq!(PlayerError::NoPoints.kind(), ErrorKind::InvalidArgument);

    let alice = player(10);
    assert_eq!(alice.id(), "P1");
    assert_eq!(alice.name(), "Alice");
    assert!(alice.bet().is_none());
    assert!(alice.hand().is_empty());
    assert_eq!(
        alice.to_string(),
        "Player id=P1, name=Alice, points=10, No Bet, Empty Hand"
    );
}

#[test]
fn assign_then_reset_bet_restores_points() {
    for amount in [1, 37, 100] {
        let mut alice = player(100);
        let bet = Bet::on_score(&alice, amount).unwrap();
        alice.assign_bet(bet).unwrap();

        assert_eq!(alice.points(), 100 - amount);
        assert_eq!(alice.quarantined(), amount);
        assert_eq!(alice.total_points(), 100);

        alice.reset_bet();
        assert_eq!(alice.points(), 100);
        assert_eq!(alice.total_points(), 100);
        assert!(alice.bet().is_none());
    }
}

#[test]
fn replacing_a_bet_returns_the_previous_stake() {
    let mut alice = player(100);
    alice.assign_bet(Bet::on_score(&alice, 20).unwrap()).unwrap();
    alice.assign_bet(Bet::on_suit(&alice, 50, Suit::Spades).unwrap()).unwrap();

    assert_eq!(alice.points(), 50);
    assert_eq!(alice.bet_amount(), 50);
    assert_eq!(alice.total_points(), 100);
}

#[test]
fn draw_returns_the_stake_and_loss_keeps_it() {
    let mut drawn = player(100);
    drawn.assign_bet(Bet::on_score(&drawn, 30).unwrap()).unwrap();
    assert_eq!(drawn.apply_bet_result(Some(&Hand::new())), Some(BetResult::Draw));
    assert_eq!(drawn.points(), 100);

    let mut lost = player(100);
    lost.assign_bet(Bet::on_score(&lost, 30).unwrap()).unwrap();
    let house = hand_of(&[card(Suit::Clubs, Rank::Two)]);
    assert_eq!(lost.apply_bet_result(Some(&house)), Some(BetResult::Loss));
    assert_eq!(lost.points(), 70);

    // Settling twice, or resetting a settled bet, leaves the balance alone.
    assert_eq!(lost.apply_bet_result(Some(&Hand::new())), Some(BetResult::Loss));
    lost.reset_bet();
    assert_eq!(lost.points(), 70);
    assert_eq!(lost.total_points(), 70);
}

#[test]
fn assign_bet_rejects_foreign_and_stale_bets() {
    let mut alice = player(100);
    let bob = Player::new("P2", "Bob", 100).unwrap();
    let err = alice.assign_bet(Bet::on_score(&bob, 10).unwrap()).unwrap_err();
    assert_eq!(err, BetError::WrongPlayer);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(alice.points(), 100);

    // Built while the full balance was still available.
    let stale = Bet::on_score(&alice, 90).unwrap();
    alice.assign_bet(Bet::on_score(&alice, 60).unwrap()).unwrap();
    let house = hand_of(&[card(Suit::Clubs, Rank::Two)]);
    assert_eq!(alice.apply_bet_result(Some(&house)), Some(BetResult::Loss));

    assert_eq!(alice.assign_bet(stale).unwrap_err(), BetError::InsufficientPoints);
    assert_eq!(alice.points(), 40);
    assert_eq!(alice.bet_amount(), 60);
}

#[test]
fn apply_bet_result_needs_a_house_hand_and_a_bet() {
    let mut alice = player(100);
    assert_eq!(alice.apply_bet_result(Some(&Hand::new())), None);

    alice.assign_bet(Bet::on_score(&alice, 10).unwrap()).unwrap();
    assert_eq!(alice.apply_bet_result(None), None);
    assert_eq!(alice.bet().map(Bet::result), Some(BetResult::Undetermined));
    assert_eq!(alice.points(), 90);
}
