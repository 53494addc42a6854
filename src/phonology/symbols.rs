//! Atomic symbols and their phonological classes

use std::collections::BTreeMap;
use std::fmt;

/// An atomic phoneme-like token
///
/// Compared by identity; carries no state beyond its character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Reserved marker for word start and end
    pub const BOUNDARY: Self = Self('#');

    /// Wrap a character as a symbol
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Underlying character
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Whether this is the boundary marker
    pub fn is_boundary(self) -> bool {
        self == Self::BOUNDARY
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Automaton-relevant category of a symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Class {
    /// Obstruents and liquids
    Consonant,
    /// Nasal consonants, the only class that reaches a coda
    Nasal,
    /// Syllable nuclei
    Vowel,
    /// Word or syllable boundary
    Boundary,
}

impl Class {
    /// Every class in index order
    pub const ALL: [Self; 4] = [Self::Consonant, Self::Nasal, Self::Vowel, Self::Boundary];

    /// Number of classes
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..Class::COUNT`
    pub const fn index(self) -> usize {
        match self {
            Self::Consonant => 0,
            Self::Nasal => 1,
            Self::Vowel => 2,
            Self::Boundary => 3,
        }
    }

    /// Inverse of [`Class::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Consonant => "C",
            Self::Nasal => "N",
            Self::Vowel => "V",
            Self::Boundary => "#",
        };
        write!(f, "{name}")
    }
}

const CONSONANTS: &[char] = &['p', 't', 'k', 's', 'r', 'l', 'v', 'h'];
const NASALS: &[char] = &['m', 'n'];
const VOWELS: &[char] = &['a', 'i', 'u', 'e', 'o'];

/// Total mapping from symbols to classes
///
/// Symbols without an explicit entry classify as [`Class::Boundary`].
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    classes: BTreeMap<Symbol, Class>,
}

impl ClassTable {
    /// Create an empty table where every symbol is a boundary
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in alphabet
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.assign(Symbol::BOUNDARY, Class::Boundary);
        for (symbols, class) in [
            (CONSONANTS, Class::Consonant),
            (NASALS, Class::Nasal),
            (VOWELS, Class::Vowel),
        ] {
            for &c in symbols {
                table.assign(Symbol::new(c), class);
            }
        }
        table
    }

    /// Set the class of a symbol, replacing any previous entry
    pub fn assign(&mut self, symbol: Symbol, class: Class) {
        self.classes.insert(symbol, class);
    }

    /// Class of a symbol, defaulting to [`Class::Boundary`]
    pub fn class_of(&self, symbol: Symbol) -> Class {
        self.classes
            .get(&symbol)
            .copied()
            .unwrap_or(Class::Boundary)
    }

    /// Whether the symbol has an explicit entry
    pub fn is_mapped(&self, symbol: Symbol) -> bool {
        self.classes.contains_key(&symbol)
    }

    /// Explicitly mapped symbols of one class, in symbol order
    pub fn members(&self, class: Class) -> Vec<Symbol> {
        self.classes
            .iter()
            .filter(|&(_, &c)| c == class)
            .map(|(&s, _)| s)
            .collect()
    }
}
