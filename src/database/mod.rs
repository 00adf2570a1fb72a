//! Módulo de banco de dados
//!
//! Gerencia a conexão e as migrações do PostgreSQL

pub mod connection;

pub use connection::DatabaseConnection;
