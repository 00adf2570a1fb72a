//! Controller de automóveis
//!
//! Faz a ponte entre os DTOs da API e o repositório: valida o payload,
//! converte para o modelo de domínio e mapeia ausência de registro
//! para 404.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::automovel_dto::{
    AtualizarAutomovelRequest, AutomovelResponse, BuscaAutomovelRequest, CriacaoResponse,
    CriarAutomovelRequest, MensagemResponse,
};
use crate::models::{AtualizacaoAutomovel, FiltroBusca, NovoAutomovel};
use crate::repositories::AutomovelRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct AutomovelController {
    repository: AutomovelRepository,
}

impl AutomovelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AutomovelRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> AppResult<Vec<AutomovelResponse>> {
        let automoveis = self.repository.listar().await?;
        Ok(automoveis.into_iter().map(AutomovelResponse::from).collect())
    }

    pub async fn buscar_por_id(&self, id: i32) -> AppResult<AutomovelResponse> {
        let automovel = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Automóvel não encontrado".to_string()))?;

        Ok(AutomovelResponse::from(automovel))
    }

    pub async fn criar(
        &self,
        request: CriarAutomovelRequest,
    ) -> AppResult<CriacaoResponse> {
        request.validate()?;

        let novo = NovoAutomovel::try_from(request)?;
        let automovel = self.repository.inserir(novo).await?;

        Ok(CriacaoResponse {
            message: "Automóvel criado com sucesso".to_string(),
            id: automovel.id,
        })
    }

    pub async fn atualizar(
        &self,
        id: i32,
        request: AtualizarAutomovelRequest,
    ) -> AppResult<MensagemResponse> {
        request.validate()?;

        let campos = AtualizacaoAutomovel::try_from(request)?;
        self.repository
            .atualizar(id, campos)
            .await?
            .ok_or_else(|| AppError::NotFound("Automóvel não encontrado".to_string()))?;

        Ok(MensagemResponse {
            message: "Automóvel atualizado com sucesso".to_string(),
        })
    }

    pub async fn deletar(&self, id: i32) -> AppResult<MensagemResponse> {
        self.repository
            .deletar(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Automóvel não encontrado".to_string()))?;

        Ok(MensagemResponse {
            message: "Automóvel deletado com sucesso".to_string(),
        })
    }

    pub async fn buscar_com_filtros(
        &self,
        request: BuscaAutomovelRequest,
    ) -> AppResult<Vec<AutomovelResponse>> {
        let filtro = FiltroBusca::try_from(request)?;
        tracing::info!("Recebendo filtros de busca: {:?}", filtro);

        let automoveis = self.repository.buscar_com_filtros(&filtro).await?;
        Ok(automoveis.into_iter().map(AutomovelResponse::from).collect())
    }
}
