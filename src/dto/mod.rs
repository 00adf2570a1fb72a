//! DTOs de request e response da API

pub mod automovel_dto;
