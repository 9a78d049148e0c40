use super::card::Card;

pub const BLACKJACK: u32 = 21;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
    // Always equals the number of aces in `cards`.
    aces: u32,
}

impl Hand {
    pub fn new() -> Hand {
        Hand::default()
    }

    pub fn from_cards(cards: &[Card]) -> Hand {
        let mut hand = Hand::new();
        for c in cards {
            hand.add_card(*c);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        if card.is_ace() {
            self.aces += 1;
        }
        self.cards.push(card);
    }

    // Aces start at 11 and are downgraded to 1, one at a time, while the hand is over 21.
    pub fn value(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(|c| c.face.value()).sum();
        let mut soft_aces = self.aces;
        while total > BLACKJACK && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        total
    }

    pub fn aces(&self) -> u32 {
        self.aces
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackjack::card::{Face, Suit};

    fn hand(faces: &[Face]) -> Hand {
        let cards: Vec<Card> = faces.iter().map(|f| Card::new(Suit::Spade, *f)).collect();
        Hand::from_cards(&cards)
    }

    #[test]
    fn hand_value_test() {
        use Face as F;

        assert_eq!(hand(&[F::Ace, F::Ace]).value(), 12);
        assert_eq!(hand(&[F::Ace, F::Ace, F::King]).value(), 12);
        assert_eq!(hand(&[F::Ace, F::King]).value(), 21);
        assert_eq!(hand(&[F::King, F::King]).value(), 20);
        assert_eq!(hand(&[F::Ace, F::Ace, F::Ace, F::Ace]).value(), 14);
        assert_eq!(hand(&[F::King, F::Queen, F::Two]).value(), 22);
        assert_eq!(hand(&[]).value(), 0);
    }

    #[test]
    fn no_aces_value_is_plain_sum_test() {
        let faces: Vec<Face> = Face::ALL.iter().copied().filter(|f| !f.is_ace()).collect();
        for a in faces.iter() {
            for b in faces.iter() {
                for c in faces.iter() {
                    let h = hand(&[*a, *b, *c]);
                    assert_eq!(h.value(), a.value() + b.value() + c.value());
                    assert_eq!(h.aces(), 0);
                }
            }
        }
    }

    #[test]
    fn ace_counter_test() {
        let mut h = hand(&[Face::Five]);
        assert_eq!(h.aces(), 0);

        h.add_card(Card::new(Suit::Club, Face::Ace));
        assert_eq!(h.aces(), 1);
        assert_eq!(h.len(), 2);

        h.add_card(Card::new(Suit::Heart, Face::Ace));
        assert_eq!(h.aces(), 2);
        assert_eq!(h.value(), 17);
    }
}
