use std::fmt;

/// The symbol placed in aligned sequences wherever one sequence has no
/// counterpart for a symbol of the other.
pub const GAP: u8 = b'-';

/// Sentinel stored in the index map for bytes outside of the alphabet.
const ABSENT: u8 = u8::MAX;

/// The nucleotide alphabet for DNA, including the ambiguity symbol *N*. Case is
/// ignored.
pub const DNA: Alphabet = Alphabet::new_ignoring_case("DNA", b"ACGTN", b'N');

/// The nucleotide alphabet for RNA, including the ambiguity symbol *N*. Case is
/// ignored.
pub const RNA: Alphabet = Alphabet::new_ignoring_case("RNA", b"ACGUN", b'N');

/// The 20 standard amino acids together with *B*, *Z*, *J*, the ambiguity
/// symbol *X*, and the stop symbol `*`. Case is ignored.
pub const PROTEIN: Alphabet = Alphabet::new_ignoring_case("Protein", b"ACDEFGHIKLMNPQRSTVWYBZJX*", b'X');

/// A finite set of symbols which a [`Sequence`] may be drawn from.
///
/// Each symbol is assigned a dense index (its position in the alphabet), which
/// similarity matrices use for lookups. One of the symbols is designated the
/// *ambiguity* symbol, used when building consensus sequences and as the
/// fallback index for bytes outside of the alphabet.
///
/// [`Sequence`]: super::sequence::Sequence
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Alphabet {
    name:        &'static str,
    symbols:     &'static [u8],
    index_map:   [u8; 256],
    ambiguity:   u8,
    ignore_case: bool,
}

impl Alphabet {
    /// Create a new [`Alphabet`] from its name, its symbols, and its ambiguity
    /// symbol. Bytes are matched exactly.
    ///
    /// ## Panics
    /// The symbols must be unique, cannot include [`GAP`], and must include
    /// `ambiguity`. At most 254 symbols are supported.
    #[must_use]
    pub const fn new(name: &'static str, symbols: &'static [u8], ambiguity: u8) -> Self {
        Self::build(name, symbols, ambiguity, false)
    }

    /// Create a new [`Alphabet`] which treats lowercase and uppercase forms of
    /// each symbol as the same symbol. The provided symbols must be uppercase,
    /// and sequences built from this alphabet are stored uppercase.
    ///
    /// ## Panics
    /// The symbols must be unique uppercase bytes, cannot include [`GAP`], and
    /// must include `ambiguity`. At most 254 symbols are supported.
    #[must_use]
    pub const fn new_ignoring_case(name: &'static str, symbols: &'static [u8], ambiguity: u8) -> Self {
        Self::build(name, symbols, ambiguity, true)
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn build(name: &'static str, symbols: &'static [u8], ambiguity: u8, ignore_case: bool) -> Self {
        assert!(!symbols.is_empty(), "An alphabet needs at least one symbol.");
        assert!(symbols.len() < ABSENT as usize, "Too many symbols for an alphabet.");

        let mut index_map = [ABSENT; 256];
        let mut i = 0;
        while i < symbols.len() {
            let symbol = symbols[i];
            assert!(symbol != GAP, "The gap symbol cannot be part of an alphabet.");
            assert!(
                !(ignore_case && symbol.is_ascii_lowercase()),
                "Symbols must be uppercase when case is ignored."
            );
            assert!(index_map[symbol as usize] == ABSENT, "Alphabet symbols must be unique.");

            // Truncation will not occur since the length is checked above
            index_map[symbol as usize] = i as u8;
            if ignore_case {
                index_map[symbol.to_ascii_lowercase() as usize] = i as u8;
            }
            i += 1;
        }

        assert!(
            index_map[ambiguity as usize] != ABSENT,
            "The ambiguity symbol must be part of the alphabet."
        );

        Alphabet {
            name,
            symbols,
            index_map,
            ambiguity: symbols[index_map[ambiguity as usize] as usize],
            ignore_case,
        }
    }

    /// The name of the alphabet, such as `DNA`.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The symbols of the alphabet, in index order.
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The number of symbols in the alphabet.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false, since construction requires at least one symbol.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol standing in for any member of the alphabet.
    #[inline]
    #[must_use]
    pub const fn ambiguity(&self) -> u8 {
        self.ambiguity
    }

    /// Whether lowercase input is accepted for uppercase symbols.
    #[inline]
    #[must_use]
    pub const fn ignores_case(&self) -> bool {
        self.ignore_case
    }

    /// Whether `byte` is a symbol of this alphabet.
    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        self.index_map[byte as usize] != ABSENT
    }

    /// Get the index of `byte` in the alphabet. Bytes outside of the alphabet
    /// map to the index of the ambiguity symbol.
    #[inline]
    #[must_use]
    pub const fn to_index(&self, byte: u8) -> usize {
        match self.index_map[byte as usize] {
            ABSENT => self.index_map[self.ambiguity as usize] as usize,
            index => index as usize,
        }
    }

    /// Get the canonical form of `byte` (uppercase when case is ignored), or
    /// [`None`] if it is not part of the alphabet.
    #[inline]
    #[must_use]
    pub const fn canonical(&self, byte: u8) -> Option<u8> {
        match self.index_map[byte as usize] {
            ABSENT => None,
            index => Some(self.symbols[index as usize]),
        }
    }

    /// Two alphabets are compatible when they share their name and symbols,
    /// so that sequences drawn from them can be aligned against each other.
    #[inline]
    #[must_use]
    pub fn is_compatible(&self, other: &Alphabet) -> bool {
        std::ptr::eq(self, other) || (self.name == other.name && self.symbols == other.symbols)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dna_ignores_case() {
        assert!(DNA.contains(b'a'));
        assert_eq!(DNA.canonical(b't'), Some(b'T'));
        assert_eq!(DNA.to_index(b'g'), DNA.to_index(b'G'));
        assert!(!DNA.contains(b'U'));
        assert!(!DNA.contains(GAP));
    }

    #[test]
    fn unknown_bytes_index_as_ambiguity() {
        assert_eq!(DNA.to_index(b'U'), 4);
        assert_eq!(PROTEIN.to_index(b'O'), PROTEIN.to_index(b'X'));
        assert_eq!(PROTEIN.ambiguity(), b'X');
    }

    #[test]
    fn exact_alphabet_rejects_other_case() {
        const BINARY: Alphabet = Alphabet::new("Binary", b"01?", b'?');
        assert!(BINARY.contains(b'1'));
        assert_eq!(BINARY.canonical(b'2'), None);
        assert!(!BINARY.ignores_case());
        assert_eq!(BINARY.len(), 3);
    }

    #[test]
    fn compatibility() {
        assert!(DNA.is_compatible(&DNA));
        assert!(!DNA.is_compatible(&RNA));
        let copied = DNA.clone();
        assert!(copied.is_compatible(&DNA));
    }

    #[test]
    #[should_panic(expected = "unique")]
    fn duplicate_symbols_panic() {
        let _ = Alphabet::new("Bad", b"AAC", b'C');
    }
}
