use super::*;
use crate::data::{
    alphabet::{Alphabet, DNA, PROTEIN, RNA},
    matrices::{DiagonalMatrix, MoleculeType, WeightMatrix},
    sequence::Sequence,
};

static UNIT: DiagonalMatrix = DiagonalMatrix::new(1, -1, MoleculeType::Dna);

fn dna(bytes: &[u8]) -> Sequence<'static> {
    Sequence::new(&DNA, bytes).unwrap()
}

fn aligned_pairs<'r>(result: &'r PairwiseSequenceAlignment<'_>) -> Vec<(&'r [u8], &'r [u8])> {
    result
        .iter()
        .map(|aligned| (aligned.first.as_slice(), aligned.second.as_slice()))
        .collect()
}

#[test]
fn global_linear_with_gap() {
    let aligner = PairwiseAligner::needleman_wunsch()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2);
    let result = aligner.align_simple(&dna(b"AC"), &dna(b"AGC")).unwrap();

    assert_eq!(result.score(), Some(0));
    assert_eq!(aligned_pairs(&result), vec![(b"A-C".as_slice(), b"AGC".as_slice())]);

    let aligned = &result.aligned_sequences()[0];
    assert_eq!(aligned.consensus, b"AGC");
    assert_eq!((aligned.first_offset, aligned.second_offset), (0, 0));
    assert_eq!(aligned.first_range, 0..2);
    assert_eq!(aligned.second_range, 0..3);
    assert_eq!(aligned.insertions, [1, 0]);
    assert_eq!(aligned.identities(), 2);
    assert_eq!(aligned.metadata["aligner"], "Needleman-Wunsch");
    assert_eq!(aligned.metadata["gaps"], "linear(-2)");
}

#[test]
fn local_linear_offsets() {
    let matrix = DiagonalMatrix::new(2, -1, MoleculeType::Dna);
    let aligner = PairwiseAligner::smith_waterman()
        .with_similarity_matrix(&matrix)
        .with_gap_open_cost(-1);
    let result = aligner.align_simple(&dna(b"AAGC"), &dna(b"AGC")).unwrap();

    assert_eq!(result.score(), Some(6));
    assert_eq!(aligned_pairs(&result), vec![(b"AGC".as_slice(), b"AGC".as_slice())]);
    let aligned = &result.aligned_sequences()[0];
    assert_eq!(aligned.first_range, 1..4);
    assert_eq!(aligned.second_range, 0..3);
    assert_eq!((aligned.first_offset, aligned.second_offset), (0, 1));
}

#[test]
fn overlap_linear_suffix_prefix() {
    let aligner = PairwiseAligner::pairwise_overlap()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2);
    let result = aligner.align_simple(&dna(b"AACGT"), &dna(b"CGTGG")).unwrap();

    assert_eq!(result.score(), Some(3));
    assert_eq!(aligned_pairs(&result), vec![(b"CGT".as_slice(), b"CGT".as_slice())]);
    let aligned = &result.aligned_sequences()[0];
    assert_eq!(aligned.first_range, 2..5);
    assert_eq!(aligned.second_range, 0..3);
    assert_eq!((aligned.first_offset, aligned.second_offset), (0, 2));
}

#[test]
fn overlap_reports_identical_strings_once() {
    let matrix = DiagonalMatrix::new(5, -20, MoleculeType::Dna);
    let aligner = PairwiseAligner::pairwise_overlap()
        .with_similarity_matrix(&matrix)
        .with_gap_open_cost(-10);
    let result = aligner.align_simple(&dna(b"CCCAACCC"), &dna(b"CCC")).unwrap();

    assert_eq!(result.score(), Some(15));
    assert_eq!(aligned_pairs(&result), vec![(b"CCC".as_slice(), b"CCC".as_slice())]);
    let aligned = &result.aligned_sequences()[0];
    assert_eq!(aligned.first_range, 0..3);
    assert_eq!((aligned.first_offset, aligned.second_offset), (0, 0));
}

#[test]
fn local_reports_identical_strings_once() {
    let aligner = PairwiseAligner::smith_waterman()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2);
    let result = aligner.align_simple(&dna(b"AA"), &dna(b"A")).unwrap();

    assert_eq!(result.score(), Some(1));
    assert_eq!(aligned_pairs(&result), vec![(b"A".as_slice(), b"A".as_slice())]);
    assert_eq!(result.aligned_sequences()[0].first_range, 0..1);
}

#[test]
fn linear_ties_are_all_enumerated() {
    let aligner = PairwiseAligner::needleman_wunsch()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-1);
    let result = aligner.align_simple(&dna(b"AAAA"), &dna(b"AA")).unwrap();

    assert_eq!(result.score(), Some(0));
    let seconds: Vec<&[u8]> = result.iter().map(|aligned| aligned.second.as_slice()).collect();
    assert_eq!(
        seconds,
        vec![
            b"--AA".as_slice(),
            b"-A-A".as_slice(),
            b"A--A".as_slice(),
            b"-AA-".as_slice(),
            b"A-A-".as_slice(),
            b"AA--".as_slice(),
        ]
    );
    assert!(result.iter().all(|aligned| aligned.first == b"AAAA"));
}

#[test]
fn affine_ties_keep_gaps_together() {
    let aligner = PairwiseAligner::needleman_wunsch()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-3)
        .with_gap_extension_cost(-1);
    let result = aligner.align(&dna(b"AAAA"), &dna(b"AA")).unwrap();

    assert_eq!(result.score(), Some(-2));
    let seconds: Vec<&[u8]> = result.iter().map(|aligned| aligned.second.as_slice()).collect();
    assert_eq!(seconds, vec![b"--AA".as_slice(), b"A--A".as_slice(), b"AA--".as_slice()]);
    assert!(result.iter().all(|aligned| aligned.insertions == [0, 2]));
}

#[test]
fn local_without_positive_cells_is_empty() {
    let aligner = PairwiseAligner::smith_waterman()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2);
    let result = aligner.align_simple(&dna(b"TTTT"), &dna(b"GGGG")).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.score(), None);
    assert_eq!(result.first_sequence().as_bytes(), b"TTTT");
}

#[test]
fn earth_fill_gives_identical_results() {
    let first = dna(b"GGCCACAGGATTGAGCATTAGCAAGGTCAGTTACGGACTA");
    let second = dna(b"TACCACAGTATTAGGCAAGCGTCAGTCACGATTA");

    for mode in [AlignmentMode::Global, AlignmentMode::Local, AlignmentMode::Overlap] {
        let aligner = PairwiseAligner::new(mode)
            .with_similarity_matrix(&UNIT)
            .with_gap_open_cost(-2)
            .with_gap_extension_cost(-1);
        let earth = aligner.with_earth_fill(true);
        assert!(earth.uses_earth_fill());

        assert_eq!(
            aligner.align_simple(&first, &second).unwrap(),
            earth.align_simple(&first, &second).unwrap()
        );
        assert_eq!(aligner.align(&first, &second).unwrap(), earth.align(&first, &second).unwrap());
    }
}

#[test]
fn missing_configuration() {
    let first = dna(b"ACGT");
    let second = dna(b"ACG");

    let aligner = PairwiseAligner::needleman_wunsch();
    assert_eq!(
        aligner.align_simple(&first, &second),
        Err(AlignmentError::Configuration(ConfigurationError::MissingSimilarityMatrix))
    );

    let aligner = aligner.with_similarity_matrix(&UNIT);
    assert_eq!(
        aligner.align_simple(&first, &second),
        Err(AlignmentError::Configuration(ConfigurationError::MissingGapOpenCost))
    );

    let aligner = aligner.with_gap_open_cost(-2);
    assert!(aligner.align_simple(&first, &second).is_ok());
    assert_eq!(
        aligner.align(&first, &second),
        Err(AlignmentError::Configuration(ConfigurationError::MissingGapExtensionCost))
    );
}

#[test]
fn explicit_scoring_overrides_configuration() {
    let aligner = PairwiseAligner::needleman_wunsch();
    let result = aligner.align_simple_with(&UNIT, -2, &dna(b"AC"), &dna(b"AGC")).unwrap();
    assert_eq!(result.score(), Some(0));

    let result = aligner.align_with(&UNIT, -2, -2, &dna(b"AC"), &dna(b"AGC")).unwrap();
    assert_eq!(result.score(), Some(0));
}

#[test]
fn invalid_inputs() {
    let aligner = PairwiseAligner::needleman_wunsch()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2);

    assert_eq!(
        aligner.align_simple(&dna(b""), &dna(b"A")),
        Err(AlignmentError::InvalidInput(InputError::EmptySequence(Which::First)))
    );
    assert_eq!(
        aligner.align_simple(&dna(b"A"), &dna(b"")),
        Err(AlignmentError::InvalidInput(InputError::EmptySequence(Which::Second)))
    );

    let rna = Sequence::new(&RNA, b"ACGU").unwrap();
    assert_eq!(
        aligner.align_simple(&dna(b"ACGT"), &rna),
        Err(AlignmentError::InvalidInput(InputError::AlphabetMismatch {
            first:  "DNA",
            second: "RNA",
        }))
    );

    let protein = Sequence::new(&PROTEIN, b"HEAGAWGHEE").unwrap();
    assert_eq!(
        aligner.align_simple(&protein, &protein),
        Err(AlignmentError::Configuration(ConfigurationError::UnsupportedAlphabet {
            which:    Which::First,
            alphabet: "Protein",
        }))
    );
}

#[test]
fn sequence_lists_must_hold_two() {
    let aligner = PairwiseAligner::pairwise_overlap()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2)
        .with_gap_extension_cost(-1);

    let three = [dna(b"ACGT"), dna(b"CGT"), dna(b"GT")];
    assert_eq!(
        aligner.align_simple_list(&three),
        Err(AlignmentError::InvalidInput(InputError::WrongSequenceCount(3)))
    );
    assert_eq!(
        aligner.align_list(&three[..1]),
        Err(AlignmentError::InvalidInput(InputError::WrongSequenceCount(1)))
    );
    assert!(aligner.align_list(&three[..2]).is_ok());
    assert!(aligner.align_simple_list(&three[1..]).is_ok());
}

#[test]
fn positive_gap_costs() {
    let aligner = PairwiseAligner::needleman_wunsch()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(1);
    assert!(aligner.align_simple(&dna(b"AC"), &dna(b"AGC")).is_ok());

    let strict = aligner.with_positive_gap_costs_rejected(true);
    assert_eq!(
        strict.align_simple(&dna(b"AC"), &dna(b"AGC")),
        Err(AlignmentError::Configuration(ConfigurationError::PositiveGapCost(1)))
    );
}

#[test]
fn pairs_align_in_order() {
    let aligner = PairwiseAligner::smith_waterman()
        .with_similarity_matrix(&UNIT)
        .with_gap_open_cost(-2);
    let pairs = vec![
        (dna(b"AAGC"), dna(b"AGC")),
        (dna(b"TTTT"), dna(b"GGGG")),
        (dna(b"ACGTACGT"), dna(b"ACGTACGT")),
    ];
    let results = aligner.align_pairs(&pairs).unwrap();
    let scores: Vec<_> = results.iter().map(PairwiseSequenceAlignment::score).collect();
    assert_eq!(scores, vec![Some(3), None, Some(8)]);
}

#[test]
fn custom_alphabet_and_weights() {
    static BINARY: Alphabet = Alphabet::new("Binary", b"01", b'0');
    static WEIGHTS: WeightMatrix<'static, 2> = WeightMatrix::new(&BINARY, 3, -2, None);

    let first = Sequence::new(&BINARY, b"0110").unwrap();
    let second = Sequence::new(&BINARY, b"110").unwrap();
    let aligner = PairwiseAligner::smith_waterman()
        .with_similarity_matrix(&WEIGHTS)
        .with_gap_open_cost(-4);
    let result = aligner.align_simple(&first, &second).unwrap();
    assert_eq!(result.score(), Some(9));
    assert_eq!(result.aligned_sequences()[0].first, b"110");
}

#[test]
fn default_scoring_and_names() {
    let aligner = PairwiseAligner::pairwise_overlap().with_default_scoring();
    assert_eq!(aligner.gap_open_cost(), Some(DEFAULT_GAP_OPEN_COST));
    assert_eq!(aligner.gap_extension_cost(), Some(DEFAULT_GAP_EXTENSION_COST));
    assert_eq!(aligner.name(), "Pairwise-Overlap");
    assert!(!aligner.description().is_empty());
    assert_eq!(
        aligner.similarity_matrix().map(|matrix| matrix.name()),
        Some(String::from("Diagonal(2, -2, Protein)"))
    );

    let first = Sequence::new(&PROTEIN, b"HEAGAWGHEE").unwrap();
    let second = Sequence::new(&PROTEIN, b"PAWHEAE").unwrap();
    let result = aligner.align(&first, &second).unwrap();
    assert!(result.score().is_some_and(|score| score > 0));
}
