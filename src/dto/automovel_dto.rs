//! DTOs da API de automóveis
//!
//! Requests e responses JSON da API, com as conversões de e para o
//! modelo de domínio. O preço trafega como float no JSON e vira
//! DECIMAL(10,2) na fronteira com o banco.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{AtualizacaoAutomovel, Automovel, FiltroBusca, NovoAutomovel};
use crate::utils::errors::AppError;

// Request para criar um automóvel - marca, modelo e ano são obrigatórios
#[derive(Debug, Deserialize, Validate)]
pub struct CriarAutomovelRequest {
    #[validate(length(min = 1, max = 50))]
    pub marca: String,

    #[validate(length(min = 1, max = 50))]
    pub modelo: String,

    #[validate(range(min = 1900, max = 2100))]
    pub ano: i32,

    #[validate(length(max = 20))]
    pub motorizacao: Option<String>,

    #[validate(length(max = 30))]
    pub combustivel: Option<String>,

    #[validate(length(max = 30))]
    pub cor: Option<String>,

    pub quilometragem: Option<i32>,
    pub numero_portas: Option<i32>,

    #[validate(length(max = 30))]
    pub transmissao: Option<String>,

    #[validate(length(max = 10))]
    pub placa: Option<String>,

    pub preco: Option<f64>,
}

/// Distingue campo ausente (None) de null explícito (Some(None)) na
/// deserialização dos campos anuláveis da atualização parcial
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

// Request para atualização parcial - somente os campos presentes são
// gravados (null explícito limpa o campo); nomes de campo desconhecidos
// são rejeitados com 400
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AtualizarAutomovelRequest {
    #[validate(length(min = 1, max = 50))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub modelo: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub ano: Option<i32>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 20))]
    pub motorizacao: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 30))]
    pub combustivel: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 30))]
    pub cor: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub quilometragem: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub numero_portas: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 30))]
    pub transmissao: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 10))]
    pub placa: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub preco: Option<Option<f64>>,
}

// Request de busca com filtros - todos opcionais, corpo vazio retorna tudo
#[derive(Debug, Default, Deserialize)]
pub struct BuscaAutomovelRequest {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<i32>,
    pub combustivel: Option<String>,
    pub preco_min: Option<f64>,
    pub preco_max: Option<f64>,
}

// Response de automóvel
#[derive(Debug, Serialize)]
pub struct AutomovelResponse {
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
    pub preco: Option<f64>,
}

// Response de criação - devolve o id atribuído pelo banco
#[derive(Debug, Serialize)]
pub struct CriacaoResponse {
    pub message: String,
    pub id: i32,
}

// Response genérica com mensagem
#[derive(Debug, Serialize)]
pub struct MensagemResponse {
    pub message: String,
}

/// Converte o preço recebido como float para DECIMAL com 2 casas
pub fn preco_para_decimal(valor: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(valor)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| AppError::BadRequest(format!("Preço inválido: {}", valor)))
}

impl From<Automovel> for AutomovelResponse {
    fn from(automovel: Automovel) -> Self {
        Self {
            id: automovel.id,
            marca: automovel.marca,
            modelo: automovel.modelo,
            ano: automovel.ano,
            motorizacao: automovel.motorizacao,
            combustivel: automovel.combustivel,
            cor: automovel.cor,
            quilometragem: automovel.quilometragem,
            numero_portas: automovel.numero_portas,
            transmissao: automovel.transmissao,
            placa: automovel.placa,
            preco: automovel.preco.and_then(|p| p.to_string().parse().ok()),
        }
    }
}

impl TryFrom<CriarAutomovelRequest> for NovoAutomovel {
    type Error = AppError;

    fn try_from(request: CriarAutomovelRequest) -> Result<Self, AppError> {
        Ok(Self {
            marca: request.marca,
            modelo: request.modelo,
            ano: request.ano,
            motorizacao: request.motorizacao,
            combustivel: request.combustivel,
            cor: request.cor,
            quilometragem: request.quilometragem,
            numero_portas: request.numero_portas,
            transmissao: request.transmissao,
            placa: request.placa,
            preco: request.preco.map(preco_para_decimal).transpose()?,
        })
    }
}

impl TryFrom<AtualizarAutomovelRequest> for AtualizacaoAutomovel {
    type Error = AppError;

    fn try_from(request: AtualizarAutomovelRequest) -> Result<Self, AppError> {
        Ok(Self {
            marca: request.marca,
            modelo: request.modelo,
            ano: request.ano,
            motorizacao: request.motorizacao,
            combustivel: request.combustivel,
            cor: request.cor,
            quilometragem: request.quilometragem,
            numero_portas: request.numero_portas,
            transmissao: request.transmissao,
            placa: request.placa,
            preco: match request.preco {
                Some(Some(valor)) => Some(Some(preco_para_decimal(valor)?)),
                Some(None) => Some(None),
                None => None,
            },
        })
    }
}

impl TryFrom<BuscaAutomovelRequest> for FiltroBusca {
    type Error = AppError;

    fn try_from(request: BuscaAutomovelRequest) -> Result<Self, AppError> {
        Ok(Self {
            marca: request.marca,
            modelo: request.modelo,
            ano: request.ano,
            combustivel: request.combustivel,
            preco_min: request.preco_min.map(preco_para_decimal).transpose()?,
            preco_max: request.preco_max.map(preco_para_decimal).transpose()?,
        })
    }
}
