//! Modelo de Automóvel
//!
//! Este módulo contém o struct Automovel e suas variantes para as
//! operações CRUD. Mapeia exatamente o schema PostgreSQL da tabela
//! 'automoveis', com primary key 'id' atribuída pelo banco.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Automóvel principal - mapeia exatamente a tabela automoveis
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Automovel {
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub motorizacao: Option<String>,
    pub combustivel: Option<String>,
    pub cor: Option<String>,
    pub quilometragem: Option<i32>,
    pub numero_portas: Option<i32>,
    pub transmissao: Option<String>,
    pub placa: Option<String>,
    pub preco: Option<Decimal>,
}

/// Automóvel ainda sem id - o banco atribui o identificador no insert
#[derive(Debug, Clone)]
pub struct NovoAutomovel {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub motorizacao: Option<String>,
    pub combustivel: Option<String>,
    pub cor: Option<String>,
    pub quilometragem: Option<i32>,
    pub numero_portas: Option<i32>,
    pub transmissao: Option<String>,
    pub placa: Option<String>,
    pub preco: Option<Decimal>,
}

/// Campos de uma atualização parcial - somente os presentes são gravados.
/// A lista de campos deste struct é a allow-list de atualização: nomes
/// fora dela são rejeitados na fronteira de deserialização.
///
/// Nos campos anuláveis o Option externo indica presença no payload e o
/// interno o valor: Some(None) grava NULL, None deixa o valor atual.
#[derive(Debug, Clone, Default)]
pub struct AtualizacaoAutomovel {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    pub motorizacao: Option<Option<String>>,
    pub combustivel: Option<Option<String>>,
    pub cor: Option<Option<String>>,
    pub quilometragem: Option<Option<i32>>,
    pub numero_portas: Option<Option<i32>>,
    pub transmissao: Option<Option<String>>,
    pub placa: Option<Option<String>>,
    pub preco: Option<Option<Decimal>>,
}

/// Filtros para a busca de automóveis - todos opcionais,
/// filtro vazio retorna todos os registros
#[derive(Debug, Clone, Default)]
pub struct FiltroBusca {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    pub combustivel: Option<String>,
    pub preco_min: Option<Decimal>,
    pub preco_max: Option<Decimal>,
}

impl FiltroBusca {
    /// Verdadeiro quando nenhum critério foi informado
    pub fn esta_vazio(&self) -> bool {
        self.marca.is_none()
            && self.modelo.is_none()
            && self.ano.is_none()
            && self.combustivel.is_none()
            && self.preco_min.is_none()
            && self.preco_max.is_none()
    }
}
