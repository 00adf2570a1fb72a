//! Middleware de CORS
//!
//! Configuração de CORS para permitir requests de diferentes origens.

use tower_http::cors::CorsLayer;

/// Criar middleware de CORS configurado para desenvolvimento
/// NOTA: permite qualquer origem - somente para desenvolvimento
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
