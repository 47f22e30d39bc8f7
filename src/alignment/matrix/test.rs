use super::*;
use crate::{
    alignment::GapCosts,
    data::matrices::{DiagonalMatrix, MoleculeType},
};

static DNA_MATRIX: DiagonalMatrix = DiagonalMatrix::new(1, -1, MoleculeType::Dna);

fn kernel<'k>(mode: AlignmentMode, gaps: GapCosts, first: &'k [u8], second: &'k [u8]) -> Kernel<'k> {
    Kernel {
        mode,
        scoring: ScoringModel {
            matrix: &DNA_MATRIX,
            gaps,
        },
        first,
        second,
    }
}

const FIRST: &[u8] = b"GGCCACAGGATTGAGCATTAGCAAGGTCAGTTACGGACTA";
const SECOND: &[u8] = b"TACCACAGTATTAGGCAAGCGTCAGTCACGATTA";

#[test]
fn global_linear_boundaries() {
    let dp = DpMatrix::filled(
        &kernel(AlignmentMode::Global, GapCosts::linear(-2), b"AC", b"AGC"),
        FillStrategy::RowMajor,
    );
    assert_eq!((dp.rows(), dp.cols()), (3, 4));
    for j in 0..4 {
        assert_eq!(dp.score(0, j), -2 * j as i32);
    }
    for i in 0..3 {
        assert_eq!(dp.score(i, 0), -2 * i as i32);
    }
    assert!(dp.backtrack.get(0, 2).has(BacktrackCell::LEFT));
    assert!(dp.backtrack.get(2, 0).has(BacktrackCell::UP));
    assert_eq!(dp.score(2, 3), 0);
}

#[test]
fn global_affine_boundaries() {
    let dp = DpMatrix::filled(
        &kernel(AlignmentMode::Global, GapCosts::affine(-3, -1), b"ACGT", b"AC"),
        FillStrategy::RowMajor,
    );
    assert!(dp.is_affine());
    assert_eq!(dp.cell(0, 0), Cell::only_m(0));
    assert_eq!(dp.cell(1, 0).ix, -3);
    assert_eq!(dp.cell(4, 0).ix, -6);
    assert_eq!(dp.cell(4, 0).m, NEG_INF);
    assert_eq!(dp.cell(0, 2).iy, -4);
    assert!(dp.backtrack.get(1, 0).has(BacktrackCell::UP));
    assert!(dp.backtrack.get(3, 0).has(BacktrackCell::UP_EXTENDING));
    assert!(dp.backtrack.get(0, 2).has(BacktrackCell::LEFT_EXTENDING));

    // AC-- against AC with one affine gap of length 2
    assert_eq!(dp.score(4, 2), 2 - 3 - 1);
}

#[test]
fn local_and_overlap_boundaries_are_zero() {
    for mode in [AlignmentMode::Local, AlignmentMode::Overlap] {
        for gaps in [GapCosts::linear(-2), GapCosts::affine(-3, -1)] {
            let dp = DpMatrix::filled(&kernel(mode, gaps, b"ACGT", b"TTA"), FillStrategy::RowMajor);
            for j in 0..dp.cols() {
                assert_eq!(dp.cell(0, j).m, 0);
            }
            for i in 0..dp.rows() {
                assert_eq!(dp.cell(i, 0).m, 0);
            }
            assert_eq!(dp.backtrack.get(2, 0).is_stop(), mode == AlignmentMode::Local);
        }
    }
}

#[test]
fn local_scores_never_negative() {
    let dp = DpMatrix::filled(
        &kernel(AlignmentMode::Local, GapCosts::linear(-2), FIRST, SECOND),
        FillStrategy::RowMajor,
    );
    for i in 0..dp.rows() {
        for j in 0..dp.cols() {
            assert!(dp.score(i, j) >= 0);
            if dp.score(i, j) == 0 && i > 0 && j > 0 {
                assert!(dp.backtrack.get(i, j).is_stop());
            }
        }
    }
}

#[test]
fn local_start_cells() {
    let dp = DpMatrix::filled(
        &kernel(AlignmentMode::Local, GapCosts::linear(-1), b"AAGC", b"AGC"),
        FillStrategy::RowMajor,
    );
    assert_eq!(dp.start_cells(AlignmentMode::Local), (vec![(4, 3)], 3));

    let dp = DpMatrix::filled(
        &kernel(AlignmentMode::Local, GapCosts::linear(-2), b"TTTT", b"GGGG"),
        FillStrategy::RowMajor,
    );
    assert_eq!(dp.start_cells(AlignmentMode::Local), (Vec::new(), 0));
}

#[test]
fn overlap_start_cells_on_last_row_and_column() {
    let matrix = DiagonalMatrix::new(5, -20, MoleculeType::Dna);
    let k = Kernel {
        mode:    AlignmentMode::Overlap,
        scoring: ScoringModel {
            matrix: &matrix,
            gaps:   GapCosts::linear(-10),
        },
        first:   b"CCCAACCC",
        second:  b"CCC",
    };
    let dp = DpMatrix::filled(&k, FillStrategy::RowMajor);
    assert_eq!(dp.start_cells(AlignmentMode::Overlap), (vec![(3, 3), (8, 3)], 15));
}

#[test]
fn wavefront_matches_row_major() {
    let cases = [
        (AlignmentMode::Global, GapCosts::linear(-2)),
        (AlignmentMode::Global, GapCosts::affine(-3, -1)),
        (AlignmentMode::Local, GapCosts::linear(-1)),
        (AlignmentMode::Local, GapCosts::affine(-4, -1)),
        (AlignmentMode::Overlap, GapCosts::linear(-2)),
        (AlignmentMode::Overlap, GapCosts::affine(-2, -2)),
    ];

    for threads in [1, 2, 3, 7] {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build().unwrap();
        for (mode, gaps) in cases {
            for (first, second) in [(FIRST, SECOND), (SECOND, FIRST), (b"A".as_slice(), SECOND)] {
                let k = kernel(mode, gaps, first, second);
                let row_major = DpMatrix::filled(&k, FillStrategy::RowMajor);
                let wavefront = pool.install(|| DpMatrix::filled(&k, FillStrategy::Wavefront));
                assert_eq!(row_major, wavefront, "{mode} {gaps} on {threads} threads");
            }
        }
    }
}
