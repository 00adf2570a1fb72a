//! API de inventário de automóveis
//!
//! CRUD de automóveis sobre PostgreSQL com busca por filtros
//! conjuntivos. Os binários `agente` (coletor conversacional de
//! filtros) e `popular` (seeder de dados fake) consomem esta lib.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
