//! Configuração de variáveis de ambiente

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
}

impl EnvironmentConfig {
    /// Carrega HOST e PORT do ambiente, com defaults de desenvolvimento
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// Endereço completo do servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = EnvironmentConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:5000");
    }
}
