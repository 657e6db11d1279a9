use thiserror::Error;

use crate::services::dataset::DatasetError;
use crate::services::query::QueryError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every way a lookup can end without printing a conjugation. All are final.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Erreur : Trop d'arguments fournis. Veuillez ne pas utiliser de caractères génériques (*) ou autres.")]
    TooManyArguments,

    #[error("Erreur lors du chargement du fichier JSON: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Le verbe '{query}' n'est pas trouvé dans le fichier JSON.")]
    NotFound { query: String, samples: Vec<String> },
}

impl AppError {
    /// Lines shown to the user on stdout.
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        if let AppError::NotFound { samples, .. } = self {
            lines.push(format!("Exemple de verbes présents : {}", samples.join(", ")));
        }
        lines
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}
