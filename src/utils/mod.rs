//! Utilidades do sistema
//!
//! Este módulo contém o tratamento de erros compartilhado pela aplicação.

pub mod errors;
