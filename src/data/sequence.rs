use crate::data::{
    alphabet::{Alphabet, GAP},
    err::SequenceError,
};
use std::fmt;

/// An identified, validated sequence of symbols drawn from an [`Alphabet`].
///
/// Symbols are stored in their canonical form, so a DNA sequence built from
/// `acgt` holds `ACGT`. Sequences are immutable once built.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Sequence<'a> {
    id:       String,
    alphabet: &'a Alphabet,
    symbols:  Vec<u8>,
}

impl<'a> Sequence<'a> {
    /// Build a sequence without an identifier.
    ///
    /// ## Errors
    /// Fails if `bytes` contains the gap symbol or any byte not in `alphabet`.
    ///
    /// ## Example
    /// ```
    /// # use pairalign::prelude::*;
    /// let seq = Sequence::new(&DNA, b"acgt").unwrap();
    /// assert_eq!(seq.as_bytes(), b"ACGT");
    /// assert!(Sequence::new(&DNA, b"AC-T").is_err());
    /// ```
    pub fn new(alphabet: &'a Alphabet, bytes: impl AsRef<[u8]>) -> Result<Self, SequenceError> {
        Self::with_id(String::new(), alphabet, bytes)
    }

    /// Build a sequence with the given identifier.
    ///
    /// ## Errors
    /// Fails if `bytes` contains the gap symbol or any byte not in `alphabet`.
    pub fn with_id(id: impl Into<String>, alphabet: &'a Alphabet, bytes: impl AsRef<[u8]>) -> Result<Self, SequenceError> {
        let symbols = bytes
            .as_ref()
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                if symbol == GAP {
                    return Err(SequenceError::GapInInput(position));
                }
                alphabet.canonical(symbol).ok_or(SequenceError::InvalidSymbol {
                    symbol,
                    position,
                    alphabet: alphabet.name(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Sequence {
            id: id.into(),
            alphabet,
            symbols,
        })
    }

    /// Build a sequence from symbols already known to be canonical members of
    /// `alphabet`.
    #[cfg(feature = "rand")]
    pub(crate) fn from_symbols_unchecked(alphabet: &'a Alphabet, symbols: Vec<u8>) -> Self {
        debug_assert!(symbols.iter().all(|&s| alphabet.canonical(s) == Some(s)));
        Sequence {
            id: String::new(),
            alphabet,
            symbols,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl AsRef<[u8]> for Sequence<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.id.is_empty() {
            write!(f, "{}: ", self.id)?;
        }
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::alphabet::{DNA, PROTEIN};

    #[test]
    fn canonicalizes_case() {
        let seq = Sequence::with_id("s1", &DNA, "aCgN").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGN");
        assert_eq!(seq.id(), "s1");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.to_string(), "s1: ACGN");
    }

    #[test]
    fn rejects_gaps_and_foreign_symbols() {
        assert_eq!(Sequence::new(&DNA, b"AC-G"), Err(SequenceError::GapInInput(2)));
        assert_eq!(
            Sequence::new(&DNA, b"ACU"),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'U',
                position: 2,
                alphabet: "DNA",
            })
        );
        assert!(Sequence::new(&PROTEIN, b"HEAGAWGHEE*").is_ok());
    }

    #[test]
    fn empty_is_allowed_at_construction() {
        let seq = Sequence::new(&DNA, b"").unwrap();
        assert!(seq.is_empty());
    }
}
