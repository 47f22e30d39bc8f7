use super::*;
use crate::{
    alignment::PairwiseAligner,
    data::{
        alphabet::{DNA, PROTEIN},
        matrices::{DiagonalMatrix, MoleculeType},
    },
};

static ALPHABETS: [&Alphabet; 2] = [&DNA, &PROTEIN];

fn overlap_result() -> PairwiseSequenceAlignment<'static> {
    static MATRIX: DiagonalMatrix = DiagonalMatrix::new(5, -20, MoleculeType::Dna);
    let first = Sequence::with_id("reads_1", &DNA, b"CCCAACCC").unwrap();
    let second = Sequence::with_id("reads_2", &DNA, b"CCC").unwrap();
    PairwiseAligner::pairwise_overlap()
        .with_similarity_matrix(&MATRIX)
        .with_gap_open_cost(-10)
        .align_simple(&first, &second)
        .unwrap()
}

fn write_all(results: &[PairwiseSequenceAlignment<'_>]) -> String {
    let mut writer = PairwiseRecordWriter::new(Vec::new());
    for result in results {
        writer.write(result).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

#[test]
fn writes_expected_lines() {
    let text = write_all(&[overlap_result()]);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], RECORD_HEADER);
    assert_eq!(lines[1], ">\tDNA\treads_1\tCCCAACCC\treads_2\tCCC");
    assert_eq!(
        lines[2],
        "=\t15\tCCC\tCCC\tCCC\t0\t0\t0,0\t3,3\t0,0\t\
         aligner=Pairwise-Overlap;gaps=linear(-10);matrix=Diagonal(5, -20, DNA)"
    );
}

#[test]
fn reads_back_what_was_written() {
    static MATRIX: DiagonalMatrix = DiagonalMatrix::new(1, -1, MoleculeType::Dna);
    let first = Sequence::with_id("t", &DNA, b"TTTT").unwrap();
    let second = Sequence::with_id("g", &DNA, b"GGGG").unwrap();
    let empty = PairwiseAligner::smith_waterman()
        .with_similarity_matrix(&MATRIX)
        .with_gap_open_cost(-2)
        .align_simple(&first, &second)
        .unwrap();
    assert!(empty.is_empty());

    let results = vec![overlap_result(), empty];
    let text = write_all(&results);

    let read: Vec<_> = PairwiseRecordReader::new(text.as_bytes(), &ALPHABETS)
        .collect::<std::io::Result<_>>()
        .unwrap();
    assert_eq!(read, results);
}

#[test]
fn reader_rejects_bad_input() {
    let cases = [
        ("", "No alignment record data"),
        ("#pairalign\tv0\n", "version header"),
        ("#pairalign\tv1\n>\tRNA\ta\tACGU\tb\tACGU\n", "Unknown alphabet"),
        ("#pairalign\tv1\n=\t1\tA\tA\tA\t0\t0\t0,0\t1,1\t0,0\t\n", "preceded any sequence"),
        (
            "#pairalign\tv1\n>\tDNA\ta\tA\tb\tA\n=\tone\tA\tA\tA\t0\t0\t0,0\t1,1\t0,0\t\n",
            "Invalid integer",
        ),
        (
            "#pairalign\tv1\n>\tDNA\ta\tA\tb\tA\n=\t1\tA\tA\tA\t0\t0\t0,0\t1;1\t0,0\t\n",
            "comma-separated",
        ),
        (
            "#pairalign\tv1\n>\tDNA\ta\tAC\tb\tAC\n\
             =\t2\tAC\tAC\tAC\t0\t0\t0,0\t2,2\t0,0\t\n\
             =\t-7\tA-C\tAC-\tACC\t0\t0\t0,0\t2,2\t1,1\t\n",
            "group scoring 2",
        ),
        ("#pairalign\tv1\n?\tDNA\n", "Unknown line tag"),
    ];

    for (input, expected) in cases {
        let err = PairwiseRecordReader::new(input.as_bytes(), &ALPHABETS)
            .find_map(Result::err)
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        assert!(err.to_string().contains(expected), "{err} for {input:?}");
    }
}

#[test]
fn reader_reports_invalid_symbols() {
    let input = "#pairalign\tv1\n>\tDNA\ta\tAXA\tb\tA\n";
    let err = PairwiseRecordReader::new(input.as_bytes(), &ALPHABETS)
        .next()
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn writer_rejects_reserved_characters() {
    let mut result = overlap_result();
    if let Some(aligned) = result.iter_mut().next() {
        aligned.metadata.insert("note".into(), "a=b".into());
    }

    let mut writer = PairwiseRecordWriter::new(Vec::new());
    let err = writer.write(&result).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
