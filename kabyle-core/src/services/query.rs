use thiserror::Error;

pub const WILDCARD: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Erreur : L'utilisation du caractère '*' n'est pas autorisée. Veuillez spécifier une racine de verbe valide.")]
    Wildcard,

    #[error("Erreur : Aucune racine de verbe fournie.")]
    Empty,
}

/// Rejects queries that can't name a single verb. Runs before the dataset is read.
pub fn validate(query: &str) -> Result<&str, QueryError> {
    if query.contains(WILDCARD) {
        return Err(QueryError::Wildcard);
    }
    if query.trim().is_empty() {
        return Err(QueryError::Empty);
    }
    Ok(query)
}
