//! Turn-level scenarios for the round engine and the default strategy.
//!
//! Each test builds a small preset table so the sequence of plays is
//! fully predictable.

use rust_scum::cards::Rank::{self, *};
use rust_scum::{
    play_round_robin, Group, Hand, LowestSufficient, Participant, PlayStrategy, PlayerId,
    PlayerMap, RoundEngine, TableState,
};

fn table(hands: &[&[Rank]]) -> PlayerMap<Participant> {
    PlayerMap::from_vec(
        hands
            .iter()
            .enumerate()
            .map(|(i, cards)| {
                let hand = Hand::from_cards(cards.iter().copied());
                Participant::with_hand(format!("Player {}", i + 1), hand)
            })
            .collect(),
    )
}

fn seat(i: u8) -> PlayerId {
    PlayerId::new(i)
}

/// A wild played onto a King ends the round on the spot.
#[test]
fn test_single_wild_instant_end() {
    let mut players = table(&[&[King, Ace], &[Two, Five], &[Six, Eight], &[Nine, Ten]]);
    let mut engine = RoundEngine::new(&mut players, &LowestSufficient, seat(0)).unwrap();

    let king = engine.step().unwrap();
    assert_eq!(king.played(), Some(Group::single(King)));

    let wild = engine.step().unwrap();
    assert_eq!(wild.played(), Some(Group::single(Two)));
    assert!(wild.instant_ender());
    assert!(engine.table().is_empty());
    assert!(engine.round().restricted());
    assert_eq!(engine.round().passes(), 0);
}

/// On a 7 the follow-up must be no higher than 7.
#[test]
fn test_reversing_seven() {
    let hand = Hand::from_cards([Ace, Three]);
    let table = TableState::with_play(Group::single(Seven));

    assert_eq!(
        LowestSufficient.propose_play(&hand, &table, false),
        Some(Group::single(Three))
    );

    let high_only = Hand::from_cards([Ace, King]);
    assert_eq!(LowestSufficient.propose_play(&high_only, &table, false), None);
}

/// Matching the leading rank passes over the next seat.
#[test]
fn test_rank_match_skip_event() {
    let mut players = table(&[&[Queen, Ace], &[Queen, King], &[Three, Four], &[Jack, Five]]);
    let mut engine = RoundEngine::new(&mut players, &LowestSufficient, seat(0)).unwrap();

    engine.step().unwrap();
    let matched = engine.step().unwrap();

    assert!(matched.skip_triggered());
    assert_eq!(matched.skipped, Some(seat(2)));
    assert_eq!(engine.active_seat(), seat(3));
    assert_eq!(engine.skip_count(), 1);

    // The skipped seat never got a turn.
    let next = engine.step().unwrap();
    assert_eq!(next.seat, seat(3));
}

/// 2s and Jokers are never candidates for an opening play.
#[test]
fn test_opening_restriction_excludes_wilds() {
    let empty = TableState::empty();

    let hand = Hand::from_cards([Two, Three, Three, Three]);
    let play = LowestSufficient.propose_play(&hand, &empty, true).unwrap();
    assert_eq!(play.rank(), Three);

    let wild_only = Hand::from_cards([Two, Two, Joker]);
    assert_eq!(LowestSufficient.propose_play(&wild_only, &empty, true), None);
    assert_eq!(
        LowestSufficient.propose_play(&wild_only, &empty, false),
        Some(Group::single(Two))
    );
}

/// Follow-ups must match the group size on the table.
#[test]
fn test_follow_up_matches_group_size() {
    let hand = Hand::from_cards([Four, Nine, Nine, Jack]);
    let table = TableState::with_play(Group::new(Eight, 2));

    assert_eq!(
        LowestSufficient.propose_play(&hand, &table, false),
        Some(Group::new(Nine, 2))
    );
}

/// After a round ends, play continues from the seat after the last
/// turn rather than jumping back to the round winner.
#[test]
fn test_round_end_keeps_seat_pointer() {
    let mut players = table(&[&[Four, Five], &[Joker, Three], &[Seven, Eight]]);
    let mut engine = RoundEngine::new(&mut players, &LowestSufficient, seat(0)).unwrap();

    engine.step().unwrap();
    let wild = engine.step().unwrap();
    let end = wild.round_end.unwrap();
    assert_eq!(end.winner, Some(seat(1)));

    let opener = engine.step().unwrap();
    assert_eq!(opener.seat, seat(2));
    assert_eq!(opener.played(), Some(Group::single(Seven)));
}

/// A round that ends on passes hands the opening to the seat after the
/// last passer, even when that seat did not win the round.
#[test]
fn test_pass_ended_round_opens_past_winner() {
    let mut players = table(&[&[Queen], &[Queen, Three], &[Five, Six], &[Four, Five]]);
    let mut engine = RoundEngine::new(&mut players, &LowestSufficient, seat(0)).unwrap();

    engine.step().unwrap();
    let matched = engine.step().unwrap();
    assert_eq!(matched.skipped, Some(seat(2)));

    let passers: Vec<_> = (0..3).map(|_| engine.step().unwrap()).collect();
    let seats: Vec<_> = passers.iter().map(|e| e.seat).collect();
    assert_eq!(seats, vec![seat(3), seat(0), seat(1)]);
    assert!(passers.iter().all(|e| e.is_pass()));

    let end = passers[2].round_end.unwrap();
    assert_eq!(end.winner, Some(seat(1)));
    assert!(!end.instant);
    assert!(!end.restriction_lifted);
    assert_eq!(engine.active_seat(), seat(2));
}

/// Once two of three seats are out the last one is placed without playing.
#[test]
fn test_last_seat_auto_placed() {
    let mut players = table(&[&[Three], &[Four], &[Five, Six, Seven]]);
    let record = play_round_robin(&mut players, seat(0), &LowestSufficient).unwrap();

    assert_eq!(record.finish_order.seats(), &[seat(0), seat(1), seat(2)]);
    assert!(!players[seat(2)].hand.is_empty());
}

/// A finished seat keeps its place in rotation and passes.
#[test]
fn test_finished_seat_passes() {
    let mut players = table(&[&[Three], &[Four, Ace], &[Five, King], &[Six, Queen]]);
    let record = play_round_robin(&mut players, seat(0), &LowestSufficient).unwrap();

    let seat0_turns: Vec<_> = record.events.iter().filter(|e| e.seat == seat(0)).collect();
    assert!(seat0_turns.len() > 1);
    assert!(seat0_turns[1..].iter().all(|e| e.is_pass()));
    assert_eq!(record.finish_order.at_rank(1), Some(seat(0)));
}
