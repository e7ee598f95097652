pub mod citacao;
pub mod colecao;

pub use citacao::{Citacao, CitacaoDraft, CitacaoFilter, CitacaoQuery, CitacaoRequest};
pub use colecao::{Colecao, ColecaoDraft, ColecaoFilter, ColecaoQuery, ColecaoRequest};
