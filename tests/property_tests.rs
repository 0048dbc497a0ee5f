//! Property-based tests for card, zone and game invariants.

use proptest::prelude::*;

use klondike_autoplay::cards::{Card, Deck, Rank, Suit};
use klondike_autoplay::core::{GameConfig, GameRng};
use klondike_autoplay::game::Game;
use klondike_autoplay::strategy::{Policy, RuleOrder, Strategy as Heuristic};
use klondike_autoplay::zones::{Column, Foundation, StockWaste, Tableau};

fn rank() -> impl Strategy<Value = Rank> {
    (1u8..=13).prop_map(|value| Rank::new(value).unwrap())
}

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = Deck::new(1, &mut GameRng::new(seed));
    deck.deal_cards(deck.len()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: no card is below itself.
    #[test]
    fn prop_is_below_irreflexive(c in card()) {
        prop_assert!(!c.is_below(&c));
    }

    /// Property: adjacency is antisymmetric.
    #[test]
    fn prop_is_below_antisymmetric(a in card(), b in card()) {
        if a.is_below(&b) {
            prop_assert!(!b.is_below(&a));
        }
    }

    /// Property: cards parse back from their display form.
    #[test]
    fn prop_card_display_parses(c in card()) {
        let parsed: Card = c.to_string().parse().unwrap();
        prop_assert_eq!(parsed, c);
    }

    /// Property: a foundation stack only grows by the next rank, and a
    /// rejected card leaves it unchanged.
    #[test]
    fn prop_foundation_strict_order(s in suit(), ranks in prop::collection::vec(1u8..=13, 1..40)) {
        let mut foundation = Foundation::new();
        for value in ranks {
            let before = foundation.stack(s).to_vec();
            let expected = before.len() as u8 + 1;
            let result = foundation.add_card(Card::new(Rank::new(value).unwrap(), s));

            if value == expected {
                prop_assert!(result.is_ok());
                prop_assert_eq!(foundation.stack(s).len(), before.len() + 1);
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(foundation.stack(s), &before[..]);
            }
        }
    }

    /// Property: the game is won exactly when all four stacks hold Ace to King.
    #[test]
    fn prop_game_won_iff_all_complete(heights in prop::array::uniform4(0usize..=13)) {
        let mut foundation = Foundation::new();
        for (suit, height) in Suit::ALL.into_iter().zip(heights) {
            for rank in Rank::all().take(height) {
                foundation.add_card(Card::new(rank, suit)).unwrap();
            }
        }
        prop_assert_eq!(foundation.game_won(), heights.iter().all(|&h| h == 13));
    }

    /// Property: drawing never creates or loses cards.
    #[test]
    fn prop_stock_waste_conserves_cards(seed in any::<u64>(), split in 0usize..=52, draws in 0usize..200) {
        let mut cards = shuffled_deck(seed);
        let waste = cards.split_off(split);
        let mut stock_waste = StockWaste::with_piles(cards, waste);

        for _ in 0..draws {
            let before = stock_waste.len();
            let _ = stock_waste.stock_to_waste();
            prop_assert_eq!(stock_waste.len(), before);
        }
        prop_assert_eq!(stock_waste.len(), 52);
    }

    /// Property: an empty column accepts a run only if it starts with a King.
    #[test]
    fn prop_empty_column_only_takes_kings(c in card(), target in 0usize..7) {
        let mut tableau = Tableau::default();
        let column = Column::new(target).unwrap();
        let result = tableau.add_cards(&[c], column);

        prop_assert_eq!(result.is_ok(), c.is_king());
        prop_assert_eq!(tableau.card_count(), usize::from(c.is_king()));
    }

    /// Property: autoplay keeps all 52 cards in play and never loses score.
    #[test]
    fn prop_autoplay_conserves_cards(seed in any::<u64>(), order in 0usize..120) {
        let rules = RuleOrder::all_permutations().swap_remove(order);
        let strategy = Heuristic::new(rules, Default::default());
        let mut game = Game::new(GameConfig::default(), seed).unwrap();

        let mut score = 0;
        for _ in 0..150 {
            strategy.decide(&mut game);
            prop_assert_eq!(game.card_count(), 52);
            prop_assert!(game.score() >= score);
            score = game.score();
        }
    }
}
