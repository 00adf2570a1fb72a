//! Modelos de domínio da aplicação

pub mod automovel;

pub use automovel::{AtualizacaoAutomovel, Automovel, FiltroBusca, NovoAutomovel};
