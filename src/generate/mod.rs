use crate::data::{alphabet::Alphabet, sequence::Sequence};

/// Generates a reproducible random sequence of `length` symbols drawn from
/// `alphabet`, excluding its ambiguity symbol.
///
/// ## Example
/// ```
/// # use pairalign::prelude::*;
/// let seq = rand_sequence(&DNA, 50, 7);
/// assert_eq!(seq.len(), 50);
/// assert!(!seq.as_bytes().contains(&b'N'));
/// assert_eq!(seq, rand_sequence(&DNA, 50, 7));
/// ```
#[must_use]
pub fn rand_sequence(alphabet: &Alphabet, length: usize, seed: u64) -> Sequence<'_> {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let ambiguity = alphabet.ambiguity();
    let symbols: Vec<u8> = alphabet.symbols().iter().copied().filter(|&s| s != ambiguity).collect();
    let symbols = if symbols.is_empty() { vec![ambiguity] } else { symbols };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let bytes = (1..=length)
        .map(|_| symbols[rng.next_u32() as usize % symbols.len()])
        .collect();

    Sequence::from_symbols_unchecked(alphabet, bytes)
}
