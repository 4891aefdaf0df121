#![allow(non_snake_case)]

use qpkit::{algebra::*, io::*};
use std::io::{BufReader, Cursor};

fn test_matrix() -> CscMatrix<f64> {
    // A =
    //[ ⋅    0.1   ⋅ ]
    //[ ⋅     ⋅    ⋅ ]
    //[-3.0   ⋅   2^-10]
    CscMatrix::new(
        3,
        3,
        vec![0, 1, 2, 3],
        vec![2, 0, 2],
        vec![-3.0, 0.1, 0.0009765625],
    )
}

#[test]
fn test_dump_csc_matrix_to_file() {
    let A = test_matrix();
    let file = tempfile::NamedTempFile::new().unwrap();
    dump_csc_matrix(file.path(), &A).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "3\t1\t-3.000000000000000000e+00",
            "1\t2\t1.000000000000000056e-01",
            "3\t3\t9.765625000000000000e-04",
            "3\t3\t0.000000000000000000e+00",
        ]
    );

    let B = read_csc_triplets(BufReader::new(std::fs::File::open(file.path()).unwrap())).unwrap();
    assert!(A.is_equal_approx(&B, 0.));
    assert_eq!(A, B);
}

#[test]
fn test_dump_empty_matrix() {
    let A = CscMatrix::<f64>::spalloc(4, 2, 0);
    let mut buf = Vec::new();
    write_csc_triplets(&mut buf, &A).unwrap();
    assert_eq!(
        String::from_utf8(buf.clone()).unwrap(),
        "4\t2\t0.000000000000000000e+00\n"
    );

    let B = read_csc_triplets(Cursor::new(buf)).unwrap();
    assert_eq!(A, B);
}

#[test]
fn test_dump_vector() {
    let v = [1.5, -0.0, 0.125, 1e22];
    let file = tempfile::NamedTempFile::new().unwrap();
    dump_vector(file.path(), &v).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        text,
        "1.500000000000000000e+00\n\
         -0.000000000000000000e+00\n\
         1.250000000000000000e-01\n\
         1.000000000000000000e+22\n"
    );
    assert_eq!(read_vector(Cursor::new(text)).unwrap(), v.to_vec());
}

#[test]
fn test_read_unordered_triplets() {
    let text = "2\t2\t4.0\n1\t1\t1.0\n2\t1\t2.0\n2\t2\t0.0\n";
    let A = read_csc_triplets(Cursor::new(text)).unwrap();
    assert_eq!(A.colptr, vec![0, 2, 3]);
    assert_eq!(A.to_dense().into_vec(), vec![1., 2., 0., 4.]);
}

#[test]
fn test_read_malformed_dumps() {
    assert!(matches!(
        read_csc_triplets(Cursor::new("")),
        Err(DumpError::MissingSentinel)
    ));
    assert!(matches!(
        read_csc_triplets(Cursor::new("1\t1\t1.0\n1\t1\t1.0\n")),
        Err(DumpError::Parse { line: 2, .. })
    ));
    assert!(matches!(
        read_csc_triplets(Cursor::new("0\t1\t1.0\n1\t1\t0.0\n")),
        Err(DumpError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        read_csc_triplets(Cursor::new("1\t1\tfoo\n1\t1\t0.0\n")),
        Err(DumpError::Parse { line: 1, .. })
    ));
    assert!(matches!(
        read_csc_triplets(Cursor::new("3\t1\t1.0\n2\t1\t0.0\n")),
        Err(DumpError::Format(SparseFormatError::BadRowval))
    ));
    assert!(matches!(
        read_csc_triplets(Cursor::new("1\t1\t1.0\n1\t1\t2.0\n1\t1\t0.0\n")),
        Err(DumpError::Format(SparseFormatError::BadRowOrdering))
    ));

    // column counts that cannot be allocated are rejected, not panicked on
    let text = format!("0\t{}\t0.0\n", usize::MAX);
    assert!(matches!(
        read_csc_triplets(Cursor::new(text)),
        Err(DumpError::Parse { line: 1, .. })
    ));
    let text = format!("0\t{}\t0.0\n", usize::MAX / 2);
    assert!(matches!(
        read_csc_triplets(Cursor::new(text)),
        Err(DumpError::Parse { line: 1, .. })
    ));
}
