use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET_FILE: &str = "conjugation.json";
pub const DATASET_PATH_ENV: &str = "KABYLE_CONJUGATION_PATH";

/// Where to read the dataset from when no path is given on the command line:
/// `$KABYLE_CONJUGATION_PATH`, then `conjugation.json` beside the executable,
/// then `conjugation.json` in the current directory.
pub fn resolve_dataset_path(explicit: Option<&str>) -> PathBuf {
    resolve_from(
        explicit,
        std::env::var_os(DATASET_PATH_ENV),
        std::env::current_exe().ok(),
    )
}

fn resolve_from(explicit: Option<&str>, env: Option<OsString>, exe: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Some(path) = env.filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }

    if let Some(dir) = exe.as_deref().and_then(Path::parent) {
        let beside_exe = dir.join(DEFAULT_DATASET_FILE);
        if beside_exe.exists() {
            return beside_exe;
        }
    }

    PathBuf::from(DEFAULT_DATASET_FILE)
}
