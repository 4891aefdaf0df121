#![allow(non_snake_case)]

//---------------------------------------------------------
// plain text dumps of sparse matrices and vectors, as read
// by external debugging tools.
//
// matrices are written in 1-based triplet form, one stored entry per
// line, followed by a sentinel line "m  n  0.0" carrying the matrix
// dimensions.  vectors are written one value per line.
//---------------------------------------------------------

use super::{format_exp, DumpError};
use crate::algebra::{CscMatrix, FloatT};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// Writes `M` in triplet form followed by the dimension sentinel.
pub fn write_csc_triplets<W, T>(out: &mut W, M: &CscMatrix<T>) -> std::io::Result<()>
where
    W: Write + ?Sized,
    T: FloatT,
{
    for col in 0..M.n {
        for ptr in M.colptr[col]..M.colptr[col + 1] {
            writeln!(
                out,
                "{}\t{}\t{}",
                M.rowval[ptr] + 1,
                col + 1,
                format_exp(M.nzval[ptr])
            )?;
        }
    }
    writeln!(out, "{}\t{}\t{}", M.m, M.n, format_exp(T::zero()))
}

/// Writes one value per line.
pub fn write_vector<W, T>(out: &mut W, v: &[T]) -> std::io::Result<()>
where
    W: Write + ?Sized,
    T: FloatT,
{
    for &x in v {
        writeln!(out, "{}", format_exp(x))?;
    }
    Ok(())
}

/// Writes `M` to a new file at `path` in triplet form.
pub fn dump_csc_matrix<T: FloatT>(
    path: impl AsRef<Path>,
    M: &CscMatrix<T>,
) -> Result<(), DumpError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_csc_triplets(&mut out, M)?;
    out.flush()?;
    log::info!("File {} successfully written.", path.display());
    Ok(())
}

/// Writes `v` to a new file at `path`, one value per line.
pub fn dump_vector<T: FloatT>(path: impl AsRef<Path>, v: &[T]) -> Result<(), DumpError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_vector(&mut out, v)?;
    out.flush()?;
    log::info!("File {} successfully written.", path.display());
    Ok(())
}

/// Rebuilds a matrix from a triplet dump.
///
/// The last non-blank line must be the dimension sentinel.  Entries may
/// appear in any order, but a `(row, col)` pair may appear only once.
pub fn read_csc_triplets<R: BufRead>(input: R) -> Result<CscMatrix<f64>, DumpError> {
    let mut triplets = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        triplets.push((lineno + 1, parse_triplet(lineno + 1, &line)?));
    }

    let (sentinel_line, (m, n, zero)) = triplets.pop().ok_or(DumpError::MissingSentinel)?;
    if zero != 0.0 {
        return Err(DumpError::Parse {
            line: sentinel_line,
            reason: "dimension sentinel must have a zero value".to_string(),
        });
    }

    // shift to 0-based indices and check columns now, since
    // they are used to index colptr below.  rows are left
    // for check_format
    let mut entries = Vec::with_capacity(triplets.len());
    for (line, (row, col, val)) in triplets {
        if row == 0 || col == 0 || col > n {
            return Err(DumpError::Parse {
                line,
                reason: format!("index ({}, {}) outside a {} x {} matrix", row, col, m, n),
            });
        }
        entries.push((row - 1, col - 1, val));
    }
    entries.sort_by_key(|&(row, col, _)| (col, row));

    // n comes straight from the file, so size colptr fallibly
    let too_wide = || DumpError::Parse {
        line: sentinel_line,
        reason: format!("cannot allocate a matrix with {} columns", n),
    };
    let len = n.checked_add(1).ok_or_else(too_wide)?;
    let mut colptr: Vec<usize> = Vec::new();
    colptr.try_reserve_exact(len).map_err(|_| too_wide())?;
    colptr.resize(len, 0);
    for &(_, col, _) in &entries {
        colptr[col + 1] += 1;
    }
    for col in 0..n {
        colptr[col + 1] += colptr[col];
    }
    let (rowval, nzval): (Vec<usize>, Vec<f64>) = entries
        .into_iter()
        .map(|(row, _, val)| (row, val))
        .unzip();

    let M = CscMatrix {
        m,
        n,
        colptr,
        rowval,
        nzval,
    };
    M.check_format()?;

    log::debug!("read {} x {} triplet dump with {} entries", m, n, M.nnz());
    Ok(M)
}

/// Reads a vector dump, one value per line.
pub fn read_vector<R: BufRead>(input: R) -> Result<Vec<f64>, DumpError> {
    let mut v = Vec::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        v.push(parse_field(lineno + 1, field)?);
    }
    Ok(v)
}

fn parse_triplet(line: usize, text: &str) -> Result<(usize, usize, f64), DumpError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(DumpError::Parse {
            line,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }
    Ok((
        parse_field(line, fields[0])?,
        parse_field(line, fields[1])?,
        parse_field(line, fields[2])?,
    ))
}

fn parse_field<F: std::str::FromStr>(line: usize, field: &str) -> Result<F, DumpError> {
    field.parse().map_err(|_| DumpError::Parse {
        line,
        reason: format!("cannot parse \"{}\"", field),
    })
}

#[test]
fn test_write_csc_triplets() {
    // A =
    //[ ⋅   -2.0  ⋅ ]
    //[1.0   ⋅    ⋅ ]
    //[ ⋅    ⋅    ⋅ ]
    let A = CscMatrix::new(3, 3, vec![0, 1, 2, 2], vec![1, 0], vec![1., -2.]);

    let mut buf = Vec::new();
    write_csc_triplets(&mut buf, &A).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(
        text,
        "2\t1\t1.000000000000000000e+00\n\
         1\t2\t-2.000000000000000000e+00\n\
         3\t3\t0.000000000000000000e+00\n"
    );
}
