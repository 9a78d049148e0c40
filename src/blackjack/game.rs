use std::fmt;

use super::card::{Deck, Face};
use super::hand::{Hand, BLACKJACK};

// Totals below this are always hit and are dealt away by `Game::setup`.
pub const MIN_DECISION_TOTAL: u32 = 12;
pub const DEALER_STANDS_AT: u32 = 17;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Seat {
    Player,
    Dealer,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Action {
    Stay,
    Hit,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

// What the player can see when deciding: own total and aces, and the dealer's up card.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct State {
    pub player_total: u32,
    pub aces: u32,
    pub dealer_face: Face,
}

#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl Action {
    // Order matters: greedy selection keeps the first of equally scored actions.
    pub const ALL: [Action; 2] = [Action::Stay, Action::Hit];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Stay => "Stay",
            Action::Hit => "Hit",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| a.name() == name)
    }
}

impl Outcome {
    pub fn reward(&self) -> i64 {
        match self {
            Outcome::Lose => -1,
            Outcome::Draw => 0,
            Outcome::Win => 1,
        }
    }
}

impl State {
    pub fn is_bust(&self) -> bool {
        self.player_total > BLACKJACK
    }
}

impl Game {
    pub fn new(deck: Deck) -> Game {
        Game {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    pub fn with_hands(deck: Deck, player: Hand, dealer: Hand) -> Game {
        Game {
            deck,
            player,
            dealer,
        }
    }

    // A single deck always covers one hand, so running out is a bug.
    pub fn deal(&mut self, seat: Seat) {
        let card = self
            .deck
            .draw()
            .expect("deck exhausted in the middle of a hand");
        match seat {
            Seat::Player => self.player.add_card(card),
            Seat::Dealer => self.dealer.add_card(card),
        }
    }

    pub fn setup(&mut self) {
        self.deal(Seat::Player);
        self.deal(Seat::Dealer);
        self.deal(Seat::Player);
        self.deal(Seat::Dealer);

        while self.player.value() < MIN_DECISION_TOTAL {
            self.deal(Seat::Player);
        }
    }

    pub fn play_dealer(&mut self) {
        while self.dealer.value() < DEALER_STANDS_AT {
            self.deal(Seat::Dealer);
        }
    }

    // Player bust is checked first, so a dealer bust only wins for a standing player.
    pub fn outcome(&self) -> Outcome {
        let player = self.player.value();
        let dealer = self.dealer.value();

        if player > BLACKJACK {
            Outcome::Lose
        } else if dealer > BLACKJACK {
            Outcome::Win
        } else if player > dealer {
            Outcome::Win
        } else if dealer > player {
            Outcome::Lose
        } else {
            Outcome::Draw
        }
    }

    // Only the dealer's first card is visible.
    pub fn state(&self) -> State {
        let dealer_face = self
            .dealer
            .cards()
            .first()
            .expect("state requested before the dealer was dealt")
            .face;
        State {
            player_total: self.player.value(),
            aces: self.player.aces(),
            dealer_face,
        }
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deck: {} cards, player: {} cards ({}), dealer: {} cards ({})",
            self.deck.len(),
            self.player.len(),
            self.player.value(),
            self.dealer.len(),
            self.dealer.value()
        )
    }
}
