use log::{debug, info};

use crate::cli::Cli;
use crate::config;
use crate::error::{AppError, Result};
use crate::services::{dataset, lookup, query, render};

/// How many names the not-found diagnostic suggests.
pub const SAMPLE_LIMIT: usize = 10;

/// One full lookup: validate the query, load the dataset, find the verb, render it.
/// Nothing is printed here; the caller writes the lines or the error report.
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let (path_arg, verb) = cli.positionals()?;
    let verb = query::validate(verb)?;

    let path = config::resolve_dataset_path(path_arg);
    debug!("dataset path: {}", path.display());

    let dataset = dataset::load(&path)?;
    debug!(
        "dataset encoding {}, sha256 {}",
        dataset.encoding, dataset.fingerprint
    );

    match lookup::find(&dataset.records, verb) {
        Some(record) => {
            info!("found '{verb}' (ID: {})", record.id_text());
            Ok(render::render(record))
        }
        None => Err(AppError::NotFound {
            query: verb.to_string(),
            samples: lookup::sample_names(&dataset.records, SAMPLE_LIMIT)
                .into_iter()
                .map(String::from)
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    use crate::services::query::QueryError;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("kabyle-conjugate").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn write_dataset(dir: &Path, json: &str) -> String {
        let path = dir.join("conjugation.json");
        fs::write(&path, json).expect("write dataset");
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn renders_matching_verb() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_dataset(
            dir.path(),
            r#"[
                {"name": "ečč", "id": 2, "translation": "manger"},
                {"name": "addi", "id": 1, "translation": "to take"}
            ]"#,
        );

        let lines = run(&cli(&[&path, "ADDI "])).expect("verb should render");
        assert_eq!(
            lines,
            vec![
                "".to_string(),
                "Conjugaison du verbe 'addi' (ID: 1):".to_string(),
                "  Traduction: to take".to_string(),
            ]
        );
    }

    #[test]
    fn wildcard_is_rejected_before_dataset_access() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.json");

        let err = run(&cli(&[missing.to_str().unwrap(), "ad*"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(QueryError::Wildcard)));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn too_many_arguments_are_rejected_before_dataset_access() {
        let err = run(&cli(&["nowhere.json", "addi", "ečč"])).unwrap_err();
        assert!(matches!(err, AppError::TooManyArguments));
    }

    #[test]
    fn unknown_verb_reports_up_to_ten_samples() {
        let dir = tempfile::tempdir().expect("temp dir");
        let records: Vec<String> = (0..12)
            .map(|i| format!(r#"{{"name": "v{i}", "id": {i}}}"#))
            .collect();
        let path = write_dataset(dir.path(), &format!("[{}]", records.join(",")));

        let err = run(&cli(&[&path, "missing"])).unwrap_err();
        let AppError::NotFound { query, samples } = &err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert_eq!(query, "missing");
        assert_eq!(samples.len(), SAMPLE_LIMIT);
        assert_eq!(samples.first().map(String::as_str), Some("v0"));

        let report = err.report();
        assert_eq!(report.len(), 2);
        assert!(report[1].starts_with("Exemple de verbes présents : v0, v1"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn unreadable_dataset_is_fatal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_dataset(dir.path(), "not json");

        let err = run(&cli(&[&path, "addi"])).unwrap_err();
        assert!(matches!(err, AppError::Dataset(_)));
        assert_eq!(err.report().len(), 1);
    }
}
