//! SQLite repositories. Lookups, listing and deletion go through
//! [`SqlxRepository`](citei_data::SqlxRepository); inserts and updates are
//! written out per entity.

pub mod citacao;
pub mod colecao;

pub use citacao::CitacaoRepository;
pub use colecao::ColecaoRepository;

/// Column matched by title filters.
const TITLE_SEARCH: &str = "title_search";

/// Case-folded form of a title, stored in `title_search` and applied to
/// filter needles.
fn search_key(title: &str) -> String {
    title.to_lowercase()
}
