use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// Which of the two input sequences an error refers to.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Which {
    First,
    Second,
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Which::First => f.write_str("first"),
            Which::Second => f.write_str("second"),
        }
    }
}

/// An enum representing an aligner that cannot run with its current scoring
/// configuration.
#[derive(Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// No similarity matrix was set
    MissingSimilarityMatrix,
    /// No gap opening cost was set
    MissingGapOpenCost,
    /// Affine alignment was requested without a gap extension cost
    MissingGapExtensionCost,
    /// The similarity matrix has no scores for the alphabet of a sequence
    UnsupportedAlphabet { which: Which, alphabet: &'static str },
    /// A gap cost was positive while positive gap costs are rejected
    PositiveGapCost(i32),
}

impl fmt::Display for ConfigurationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigurationError::MissingSimilarityMatrix => write!(f, "No similarity matrix was configured!"),
            ConfigurationError::MissingGapOpenCost => write!(f, "No gap open cost was configured!"),
            ConfigurationError::MissingGapExtensionCost => {
                write!(f, "Affine alignment requires a gap extension cost, but none was configured!")
            }
            ConfigurationError::UnsupportedAlphabet { which, alphabet } => write!(
                f,
                "The similarity matrix does not score the {alphabet} alphabet of the {which} sequence!"
            ),
            ConfigurationError::PositiveGapCost(cost) => {
                write!(f, "Gap costs must not be positive, but {cost} was configured!")
            }
        }
    }
}

impl fmt::Debug for ConfigurationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ConfigurationError {}
impl GetCode for ConfigurationError {}

/// An enum representing sequences that cannot be aligned.
#[derive(Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum InputError {
    /// One of the sequences has no symbols
    EmptySequence(Which),
    /// The sequences are drawn from different alphabets
    AlphabetMismatch { first: &'static str, second: &'static str },
    /// A list of sequences did not contain exactly two entries
    WrongSequenceCount(usize),
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::EmptySequence(which) => write!(f, "The {which} sequence is empty!"),
            InputError::AlphabetMismatch { first, second } => write!(
                f,
                "Sequences over different alphabets cannot be aligned: {first} and {second}!"
            ),
            InputError::WrongSequenceCount(count) => {
                write!(f, "Pairwise alignment requires exactly two sequences, but {count} were given!")
            }
        }
    }
}

impl fmt::Debug for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for InputError {}
impl GetCode for InputError {}

/// The error returned by every alignment entry point.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum AlignmentError {
    Configuration(ConfigurationError),
    InvalidInput(InputError),
}

impl fmt::Display for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlignmentError::Configuration(e) => write!(f, "Configuration error: {e}"),
            AlignmentError::InvalidInput(e) => write!(f, "Invalid input: {e}"),
        }
    }
}

impl fmt::Debug for AlignmentError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for AlignmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AlignmentError::Configuration(e) => Some(e),
            AlignmentError::InvalidInput(e) => Some(e),
        }
    }
}

impl GetCode for AlignmentError {}

impl From<ConfigurationError> for AlignmentError {
    #[inline]
    fn from(e: ConfigurationError) -> Self {
        AlignmentError::Configuration(e)
    }
}

impl From<InputError> for AlignmentError {
    #[inline]
    fn from(e: InputError) -> Self {
        AlignmentError::InvalidInput(e)
    }
}
