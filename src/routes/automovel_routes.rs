//! Rotas HTTP de automóveis

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::AutomovelController;
use crate::dto::automovel_dto::{
    AtualizarAutomovelRequest, AutomovelResponse, BuscaAutomovelRequest, CriacaoResponse,
    CriarAutomovelRequest, MensagemResponse,
};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_automovel_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_automoveis))
        .route("/", post(criar_automovel))
        .route("/search", post(buscar_automoveis_filtro))
        .route("/:id", get(buscar_automovel))
        .route("/:id", put(atualizar_automovel))
        .route("/:id", delete(deletar_automovel))
}

async fn listar_automoveis(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AutomovelResponse>>> {
    let controller = AutomovelController::new(state.pool.clone());
    let response = controller.listar().await?;
    Ok(Json(response))
}

async fn buscar_automovel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AutomovelResponse>> {
    let controller = AutomovelController::new(state.pool.clone());
    let response = controller.buscar_por_id(id).await?;
    Ok(Json(response))
}

async fn criar_automovel(
    State(state): State<AppState>,
    Json(request): Json<CriarAutomovelRequest>,
) -> AppResult<(StatusCode, Json<CriacaoResponse>)> {
    let controller = AutomovelController::new(state.pool.clone());
    let response = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn atualizar_automovel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<AtualizarAutomovelRequest>,
) -> AppResult<Json<MensagemResponse>> {
    let controller = AutomovelController::new(state.pool.clone());
    let response = controller.atualizar(id, request).await?;
    Ok(Json(response))
}

async fn deletar_automovel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MensagemResponse>> {
    let controller = AutomovelController::new(state.pool.clone());
    let response = controller.deletar(id).await?;
    Ok(Json(response))
}

async fn buscar_automoveis_filtro(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Vec<AutomovelResponse>>> {
    let request = parse_filtro(&body)?;
    let controller = AutomovelController::new(state.pool.clone());
    let response = controller.buscar_com_filtros(request).await?;
    Ok(Json(response))
}

/// Corpo ausente/vazio equivale a filtro vazio e retorna todos os
/// registros; corpo presente mas malformado é rejeitado com 400.
fn parse_filtro(body: &[u8]) -> Result<BuscaAutomovelRequest, AppError> {
    if body.is_empty() {
        return Ok(BuscaAutomovelRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Filtro de busca inválido: {}", e)))
}
