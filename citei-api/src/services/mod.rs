pub mod citacao;
pub mod colecao;

pub use citacao::CitacaoService;
pub use colecao::ColecaoService;
