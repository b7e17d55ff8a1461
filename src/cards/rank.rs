/// Card ranks in Big Two order. The ace holds three copies and
/// the deuce a single copy; every other rank holds four.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Deuce = 12,
}

impl Rank {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
            Self::Ace,
            Self::Deuce,
        ]
    }
    /// copies of this rank in the deck
    pub const fn capacity(&self) -> u8 {
        crate::CAPACITY[*self as usize]
    }
    /// copies needed to bomb. the ace bombs at its capacity
    /// of three, the deuce never bombs.
    pub const fn bomb(&self) -> Option<u8> {
        match self {
            Self::Deuce => None,
            Self::Ace => Some(3),
            _ => Some(4),
        }
    }
    /// the deuce only enters straights by wrapping around
    pub const fn sequential(&self) -> bool {
        !matches!(self, Self::Deuce)
    }
}

/// capacity lookup by rank index
pub const fn capacity(index: usize) -> u8 {
    crate::CAPACITY[index]
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Three,
            1 => Rank::Four,
            2 => Rank::Five,
            3 => Rank::Six,
            4 => Rank::Seven,
            5 => Rank::Eight,
            6 => Rank::Nine,
            7 => Rank::Ten,
            8 => Rank::Jack,
            9 => Rank::Queen,
            10 => Rank::King,
            11 => Rank::Ace,
            12 => Rank::Deuce,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u64 injection
///
/// the nibble this rank occupies in a packed Hand
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

/// char isomorphism
impl TryFrom<char> for Rank {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Deuce),
            _ => Err(anyhow::anyhow!("invalid rank char: {}", c)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Deuce => "2",
            }
        )
    }
}
