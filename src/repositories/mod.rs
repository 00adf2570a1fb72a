//! Repositórios de acesso a dados

pub mod automovel_repository;

pub use automovel_repository::AutomovelRepository;
