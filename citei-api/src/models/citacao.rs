use citei_core::prelude::{not_blank, Validate};
use citei_data::Entity;
use serde::{Deserialize, Serialize};

/// A quotation belonging to exactly one [`Colecao`](super::Colecao).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Citacao {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub colecao_id: i64,
}

impl Entity for Citacao {
    type Id = i64;

    fn table_name() -> &'static str {
        "citacoes"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "title", "author", "content", "colecao_id"]
    }
}

/// Body of `POST /citacao` and `PUT /citacao/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CitacaoRequest {
    #[garde(required, length(chars, min = 1, max = 255), custom(not_blank))]
    pub title: Option<String>,
    #[garde(length(chars, max = 255))]
    pub author: Option<String>,
    #[garde(length(chars, max = 5000))]
    pub content: Option<String>,
    #[garde(required, range(min = 1))]
    pub colecao_id: Option<i64>,
}

impl CitacaoRequest {
    /// Only called once validation passed, so `title` and `colecao_id` are present.
    pub fn into_draft(self) -> CitacaoDraft {
        CitacaoDraft {
            title: self.title.unwrap_or_default().trim().to_string(),
            author: self.author,
            content: self.content,
            colecao_id: self.colecao_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitacaoDraft {
    pub title: String,
    pub author: Option<String>,
    pub content: Option<String>,
    pub colecao_id: i64,
}

/// Query string of `GET /citacao`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CitacaoQuery {
    #[serde(alias = "title")]
    #[garde(length(chars, max = 255))]
    pub titulo: Option<String>,
    #[serde(rename = "colecaoId")]
    #[garde(range(min = 1))]
    pub colecao_id: Option<i64>,
}

impl CitacaoQuery {
    pub fn into_filter(self) -> CitacaoFilter {
        CitacaoFilter {
            title: self.titulo.filter(|t| !t.trim().is_empty()),
            colecao_id: self.colecao_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitacaoFilter {
    pub title: Option<String>,
    pub colecao_id: Option<i64>,
}
