pub mod citacao;
pub mod colecao;

use serde::Serialize;

pub use citacao::CitacaoController;
pub use colecao::ColecaoController;

/// Confirmation body returned by the delete routes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
