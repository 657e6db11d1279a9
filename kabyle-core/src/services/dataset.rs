use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use log::{info, warn};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::model::verb::VerbRecord;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Verb records loaded from one conjugation file, kept read-only for the run.
#[derive(Debug)]
pub struct Dataset {
    pub records: Vec<VerbRecord>,
    pub encoding: String,
    pub fingerprint: String,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("impossible de lire {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} n'est pas un texte {encoding} valide")]
    Decode { path: PathBuf, encoding: String },

    #[error("JSON invalide dans {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let bytes = fs::read(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let fingerprint = fingerprint(&bytes);
    let (text, encoding) = decode(path, &bytes)?;

    let records: Vec<VerbRecord> =
        serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "loaded {} verbs from {} ({encoding})",
        records.len(),
        path.display()
    );

    Ok(Dataset {
        records,
        encoding,
        fingerprint,
    })
}

/// Hex SHA-256 of the raw file, for telling dataset revisions apart in logs.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn decode(path: &Path, bytes: &[u8]) -> Result<(String, String), DatasetError> {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return decode_with(path, rest, UTF_8).map(|text| (text, "utf-8-sig".to_string()));
    }

    // valid UTF-8 is the common case; skip detection for it
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok((text.to_string(), "utf-8".to_string()));
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    warn!(
        "{} is not UTF-8, decoding as {}",
        path.display(),
        encoding.name()
    );

    decode_with(path, bytes, encoding).map(|text| (text, encoding.name().to_lowercase()))
}

fn decode_with(
    path: &Path,
    bytes: &[u8],
    encoding: &'static Encoding,
) -> Result<String, DatasetError> {
    let (text, _, had_errors) = encoding.decode(bytes);

    if had_errors {
        return Err(DatasetError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name().to_lowercase(),
        });
    }

    Ok(text.into_owned())
}
