//! Controllers da API

pub mod automovel_controller;

pub use automovel_controller::AutomovelController;
