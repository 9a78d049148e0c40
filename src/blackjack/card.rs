use std::collections::VecDeque;

use rand::prelude::*;

pub const CARDS_IN_DECK: usize = 52;

// Suit never affects the game, it only makes the deck a real deck.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Suit {
    Heart,
    Spade,
    Club,
    Diamond,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Face {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Card {
    pub suit: Suit,
    pub face: Face,
}

// Cards are dealt from the front.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Club, Suit::Diamond];
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Ace,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
    ];

    // Integer rank code, Ace is 0 and King is 12.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Face> {
        Face::ALL.get(code as usize).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Face::Ace => "Ace",
            Face::Two => "Two",
            Face::Three => "Three",
            Face::Four => "Four",
            Face::Five => "Five",
            Face::Six => "Six",
            Face::Seven => "Seven",
            Face::Eight => "Eight",
            Face::Nine => "Nine",
            Face::Ten => "Ten",
            Face::Jack => "Jack",
            Face::Queen => "Queen",
            Face::King => "King",
        }
    }

    // Short label used in the policy grid.
    pub fn symbol(&self) -> &'static str {
        match self {
            Face::Ace => "A",
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
        }
    }

    // Value counts every ace as 11, hands downgrade them as needed.
    pub fn value(&self) -> u32 {
        match self {
            Face::Ace => 11,
            Face::Jack | Face::Queen | Face::King => 10,
            f => f.code() as u32 + 1,
        }
    }

    pub fn is_ace(&self) -> bool {
        *self == Face::Ace
    }
}

impl Card {
    pub fn new(suit: Suit, face: Face) -> Card {
        Card { suit, face }
    }

    pub fn is_ace(&self) -> bool {
        self.face.is_ace()
    }
}

impl Deck {
    // All 52 cards, suit by suit, Ace to King within a suit.
    pub fn ordered() -> Deck {
        let mut cards = VecDeque::with_capacity(CARDS_IN_DECK);
        for suit in Suit::ALL.iter() {
            for face in Face::ALL.iter() {
                cards.push_back(Card::new(*suit, *face));
            }
        }
        Deck { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Deck {
        let mut cards: Vec<Card> = Deck::ordered().cards.into_iter().collect();
        cards.shuffle(rng);
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    // A stacked deck, dealt in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;

    use super::*;

    fn assert_complete(deck: &Deck) {
        assert_eq!(deck.len(), CARDS_IN_DECK);
        let unique: HashSet<Card> = deck.cards().copied().collect();
        assert_eq!(unique.len(), CARDS_IN_DECK);
        for suit in Suit::ALL.iter() {
            for face in Face::ALL.iter() {
                assert!(unique.contains(&Card::new(*suit, *face)));
            }
        }
    }

    #[test]
    fn ordered_deck_test() {
        let deck = Deck::ordered();
        assert_complete(&deck);

        let first: Vec<Card> = deck.cards().take(2).copied().collect();
        assert_eq!(
            first,
            vec![
                Card::new(Suit::Heart, Face::Ace),
                Card::new(Suit::Heart, Face::Two)
            ]
        );
    }

    #[test]
    fn shuffled_deck_test() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_complete(&Deck::shuffled(&mut rng));
        }

        let a: Vec<Card> = Deck::shuffled(&mut StdRng::seed_from_u64(1)).cards().copied().collect();
        let b: Vec<Card> = Deck::shuffled(&mut StdRng::seed_from_u64(1)).cards().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn draw_test() {
        let mut deck = Deck::ordered();
        assert_eq!(deck.draw(), Some(Card::new(Suit::Heart, Face::Ace)));
        assert_eq!(deck.len(), CARDS_IN_DECK - 1);

        let mut empty = Deck::from_cards(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.draw(), None);
    }

    #[test]
    fn face_test() {
        assert_eq!(Face::Ace.value(), 11);
        assert_eq!(Face::Two.value(), 2);
        assert_eq!(Face::Ten.value(), 10);
        assert_eq!(Face::Jack.value(), 10);
        assert_eq!(Face::King.value(), 10);

        for face in Face::ALL.iter() {
            assert_eq!(Face::from_code(face.code()), Some(*face));
        }
        assert_eq!(Face::King.code(), 12);
        assert_eq!(Face::from_code(13), None);
        assert_eq!(Face::Queen.name(), "Queen");
    }
}
