//! Types d'erreurs pour le crate mtk

use thiserror::Error;

/// Erreurs pouvant survenir lors de la traduction d'un objet MTK
#[derive(Debug, Error)]
pub enum MtkError {
    /// Valeur non convertible dans le type attendu par la règle
    #[error("Invalid value for field {field}: {value:?}")]
    InvalidField { field: String, value: String },
}

impl MtkError {
    /// Crée une erreur de champ invalide avec contexte
    pub fn invalid_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MtkError>;
