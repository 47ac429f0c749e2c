/// Property-based tests for follow-suit and spade-leading legality rules
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::domain_prop_helpers::legal_moves_helper;
use crate::domain::player::legal_moves_for_hand;
use crate::domain::{hand_has_suit, test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Follow-suit legality
    /// If a hand contains cards of the lead suit, every legal play must be of that suit.
    #[test]
    fn prop_follow_suit_legality(
        lead_suit in test_gens::suit(),
        lead_rank in test_gens::rank(),
        other_cards in test_gens::unique_cards_up_to(12),
        spades_broken in any::<bool>(),
    ) {
        let mut hand_with = vec![Card { suit: lead_suit, rank: lead_rank }];
        for card in other_cards {
            if !(card.suit == lead_suit && card.rank == lead_rank) {
                hand_with.push(card);
            }
        }

        let legal = legal_moves_for_hand(&hand_with, Some(lead_suit), spades_broken);

        for card in &legal {
            prop_assert_eq!(card.suit, lead_suit,
                "Legal play {:?} must be of lead suit {:?}", card, lead_suit);
        }
        let lead_cards = hand_with.iter().filter(|c| c.suit == lead_suit).count();
        prop_assert_eq!(legal.len(), lead_cards,
            "Legal moves count must match lead suit cards in hand");
    }

    /// Property: a player void in the lead suit may play anything, spades included,
    /// whether or not spades are broken.
    #[test]
    fn prop_void_may_play_anything((lead_suit, hand_without) in test_gens::suit().prop_flat_map(|s| {
        (Just(s), test_gens::hand_without_suit(s))
    }), spades_broken in any::<bool>()) {
        let legal = legal_moves_for_hand(&hand_without, Some(lead_suit), spades_broken);
        let legal_set: HashSet<Card> = legal.iter().copied().collect();
        let hand_set: HashSet<Card> = hand_without.iter().copied().collect();
        prop_assert_eq!(legal_set, hand_set,
            "When void in lead suit, all hand cards must be legal");
    }

    /// Property: a leader before spades are broken is never offered a spade
    /// unless the hand holds nothing else.
    #[test]
    fn prop_leader_not_offered_spades_before_break(hand in test_gens::hand()) {
        let legal = legal_moves_for_hand(&hand, None, false);
        let has_non_spade = hand.iter().any(|c| !c.is_spade());
        if has_non_spade {
            prop_assert!(legal.iter().all(|c| !c.is_spade()));
            prop_assert_eq!(legal.len(), hand.iter().filter(|c| !c.is_spade()).count());
        } else {
            prop_assert_eq!(legal.len(), hand.len());
        }
    }

    /// Property: once spades are broken the leader may lead any card.
    #[test]
    fn prop_leader_after_break_has_whole_hand(hand in test_gens::hand()) {
        let legal = legal_moves_helper(&hand, None);
        prop_assert_eq!(legal.len(), hand.len());
    }

    /// Property: Legal plays subset
    /// Legal plays are a non-empty subset of a non-empty hand, without duplicates.
    #[test]
    fn prop_legal_plays_subset(
        hand in test_gens::hand(),
        lead_suit_opt in proptest::option::of(test_gens::suit()),
        spades_broken in any::<bool>(),
    ) {
        let legal = legal_moves_for_hand(&hand, lead_suit_opt, spades_broken);

        let legal_set: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(legal_set.len(), legal.len(),
            "Legal plays must have no duplicates");
        prop_assert!(!legal.is_empty());
        for card in &legal {
            prop_assert!(hand.contains(card),
                "Legal play {:?} must be in hand", card);
        }
        if let Some(lead) = lead_suit_opt {
            if hand_has_suit(&hand, lead) {
                prop_assert!(legal.iter().all(|c| c.suit == lead));
            }
        }
    }
}
