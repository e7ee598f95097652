use citei_core::prelude::{not_blank, Validate};
use citei_data::Entity;
use serde::{Deserialize, Serialize};

/// A named collection that groups citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Colecao {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Colecao {
    type Id = i64;

    fn table_name() -> &'static str {
        "colecoes"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "title", "description"]
    }
}

/// Body of `POST /colecao` and `PUT /colecao/{id}`.
///
/// Every field is optional at the type level so that a missing title is
/// reported as a field error instead of a JSON parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ColecaoRequest {
    #[garde(required, length(chars, min = 1, max = 255), custom(not_blank))]
    pub title: Option<String>,
    #[garde(length(chars, max = 2000))]
    pub description: Option<String>,
}

impl ColecaoRequest {
    /// Only called once validation passed, so `title` is present.
    pub fn into_draft(self) -> ColecaoDraft {
        ColecaoDraft {
            title: self.title.unwrap_or_default().trim().to_string(),
            description: self.description,
        }
    }
}

/// A collection that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColecaoDraft {
    pub title: String,
    pub description: Option<String>,
}

/// Query string of `GET /colecao`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ColecaoQuery {
    #[serde(alias = "title")]
    #[garde(length(chars, max = 255))]
    pub titulo: Option<String>,
}

impl ColecaoQuery {
    pub fn into_filter(self) -> ColecaoFilter {
        ColecaoFilter {
            title: self.titulo.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColecaoFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
}
