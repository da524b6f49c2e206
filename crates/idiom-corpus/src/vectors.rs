//! Embedding matrix file formats.
//!
//! - NumPy `.npy` (v1, v2, v3), 2-D, little-endian `<f4` or `<f8`, C order.
//! - Flat binary: `count: u32 LE`, `dims: u32 LE`, then `count * dims` f32 LE.
//!
//! The format is chosen by file extension.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use idiom_core::errors::{CorpusError, IdiomError, IdiomResult};
use regex::Regex;

const NPY_MAGIC: &[u8] = b"\x93NUMPY";
const FLAT_HEADER_LEN: usize = 8;

/// Row-major matrix of embedding rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    rows: usize,
    dims: usize,
    data: Vec<f32>,
}

impl EmbeddingMatrix {
    pub fn new(rows: usize, dims: usize, data: Vec<f32>) -> Option<Self> {
        (rows.checked_mul(dims)? == data.len()).then_some(Self { rows, dims, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dims..(i + 1) * self.dims]
    }

    pub fn into_rows(self) -> Vec<Vec<f32>> {
        if self.dims == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.dims).map(<[f32]>::to_vec).collect()
    }
}

/// Read an embeddings file, choosing the format by extension.
pub fn read_embeddings(path: &Path) -> IdiomResult<EmbeddingMatrix> {
    let bytes = fs::read(path).map_err(|e| IdiomError::io(path, e))?;
    let origin = path.display().to_string();
    let is_npy = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("npy"));
    if is_npy {
        parse_npy(&bytes, &origin)
    } else {
        parse_flat(&bytes, &origin)
    }
}

fn malformed(origin: &str, reason: impl Into<String>) -> IdiomError {
    CorpusError::Malformed {
        path: origin.to_string(),
        reason: reason.into(),
    }
    .into()
}

static DESCR_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"'descr'\s*:\s*'([^']+)'").ok());
static FORTRAN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"'fortran_order'\s*:\s*(True|False)").ok());
static SHAPE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"'shape'\s*:\s*\(\s*(\d+)\s*,\s*(\d+)\s*,?\s*\)").ok()
});

fn header_field<'h>(
    re: &LazyLock<Option<Regex>>,
    header: &'h str,
    origin: &str,
    field: &str,
) -> IdiomResult<regex::Captures<'h>> {
    re.as_ref()
        .and_then(|re| re.captures(header))
        .ok_or_else(|| malformed(origin, format!("missing or unsupported {field}")))
}

/// Parse a NumPy `.npy` buffer holding a 2-D float matrix.
pub fn parse_npy(bytes: &[u8], origin: &str) -> IdiomResult<EmbeddingMatrix> {
    if bytes.len() < 10 || !bytes.starts_with(NPY_MAGIC) {
        return Err(malformed(origin, "not a .npy file"));
    }
    let major = bytes[6];
    let (header_len, header_start) = match major {
        1 => (u16::from_le_bytes([bytes[8], bytes[9]]) as usize, 10),
        2 | 3 => {
            if bytes.len() < 12 {
                return Err(malformed(origin, "truncated .npy header"));
            }
            (
                u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize,
                12,
            )
        }
        v => return Err(malformed(origin, format!("unsupported .npy version {v}"))),
    };
    let data_start = header_start + header_len;
    if bytes.len() < data_start {
        return Err(malformed(origin, "truncated .npy header"));
    }
    let header = std::str::from_utf8(&bytes[header_start..data_start])
        .map_err(|_| malformed(origin, "non-UTF-8 .npy header"))?;

    let descr = header_field(&DESCR_RE, header, origin, "descr")?[1].to_string();
    let fortran = &header_field(&FORTRAN_RE, header, origin, "fortran_order")?[1] == "True";
    let shape = header_field(&SHAPE_RE, header, origin, "2-D shape")?;
    let rows: usize = shape[1]
        .parse()
        .map_err(|_| malformed(origin, "bad row count"))?;
    let dims: usize = shape[2]
        .parse()
        .map_err(|_| malformed(origin, "bad column count"))?;

    if fortran {
        return Err(malformed(origin, "Fortran-ordered arrays are not supported"));
    }

    let body = &bytes[data_start..];
    let count = element_count(rows, dims, origin)?;
    let data = match descr.as_str() {
        "<f4" => decode_f32(body, count, origin)?,
        "<f8" => decode_f64(body, count, origin)?,
        other => return Err(malformed(origin, format!("unsupported dtype {other}"))),
    };
    EmbeddingMatrix::new(rows, dims, data).ok_or_else(|| malformed(origin, "shape overflow"))
}

/// Parse the flat binary format.
pub fn parse_flat(bytes: &[u8], origin: &str) -> IdiomResult<EmbeddingMatrix> {
    if bytes.len() < FLAT_HEADER_LEN {
        return Err(malformed(origin, "truncated header"));
    }
    let rows = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let dims = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    let data = decode_f32(&bytes[FLAT_HEADER_LEN..], element_count(rows, dims, origin)?, origin)?;
    EmbeddingMatrix::new(rows, dims, data).ok_or_else(|| malformed(origin, "shape overflow"))
}

/// Encode rows in the flat binary format.
pub fn encode_flat(rows: &[&[f32]]) -> Vec<u8> {
    let dims = rows.first().map_or(0, |r| r.len());
    let mut out = Vec::with_capacity(FLAT_HEADER_LEN + rows.len() * dims * 4);
    out.extend_from_slice(&(rows.len() as u32).to_le_bytes());
    out.extend_from_slice(&(dims as u32).to_le_bytes());
    for row in rows {
        for v in *row {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    out
}

// Header values are untrusted; every size derived from them is checked.
fn element_count(rows: usize, dims: usize, origin: &str) -> IdiomResult<usize> {
    rows.checked_mul(dims)
        .ok_or_else(|| malformed(origin, "shape overflow"))
}

fn expect_body_len(body: &[u8], count: usize, width: usize, origin: &str) -> IdiomResult<()> {
    let expected = count
        .checked_mul(width)
        .ok_or_else(|| malformed(origin, "shape overflow"))?;
    if body.len() != expected {
        return Err(malformed(
            origin,
            format!("expected {expected} data bytes, found {}", body.len()),
        ));
    }
    Ok(())
}

fn decode_f32(body: &[u8], count: usize, origin: &str) -> IdiomResult<Vec<f32>> {
    expect_body_len(body, count, 4, origin)?;
    Ok(body
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

fn decode_f64(body: &[u8], count: usize, origin: &str) -> IdiomResult<Vec<f32>> {
    expect_body_len(body, count, 8, origin)?;
    Ok(body
        .chunks_exact(8)
        .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]) as f32)
        .collect())
}
