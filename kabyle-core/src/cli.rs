use clap::{ArgAction, Parser};

use crate::error::{AppError, Result};

#[derive(Debug, Parser)]
#[command(name = "kabyle-conjugate")]
#[command(
    version,
    about = "Conjugueur de verbes kabyles à partir d'un fichier JSON de conjugaison.",
    after_help = "Exemple d'utilisation: kabyle-conjugate conjugation.json addi"
)]
pub struct Cli {
    /// [json_filepath] verbe : chemin optionnel vers conjugation.json, puis la racine du verbe (ex: addi)
    #[arg(value_name = "ARGS", required = true, num_args = 1..)]
    pub args: Vec<String>,

    /// Journaux plus détaillés sur stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Splits the positionals into an optional dataset path and the verb.
    pub fn positionals(&self) -> Result<(Option<&str>, &str)> {
        match self.args.as_slice() {
            [verb] => Ok((None, verb.as_str())),
            [path, verb] => Ok((Some(path.as_str()), verb.as_str())),
            _ => Err(AppError::TooManyArguments),
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
