//! Repositório de automóveis
//!
//! Acesso a dados da tabela 'automoveis'. Cada operação de escrita abre
//! e fecha sua própria transação: commit antes de retornar, rollback
//! integral em qualquer falha (o drop da transação do sqlx faz rollback).
//! Nenhuma operação mantém transação aberta entre chamadas.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

use crate::models::{AtualizacaoAutomovel, Automovel, FiltroBusca, NovoAutomovel};
use crate::utils::errors::{AppError, AppResult};

pub struct AutomovelRepository {
    pool: PgPool,
}

impl AutomovelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere um automóvel novo e devolve o registro com o id
    /// atribuído pelo banco. Falha de constraint (placa duplicada,
    /// por exemplo) volta como BadRequest com a mensagem do banco.
    pub async fn inserir(&self, novo: NovoAutomovel) -> AppResult<Automovel> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao abrir transação: {}", e)))?;

        let automovel = sqlx::query_as::<_, Automovel>(
            r#"
            INSERT INTO automoveis (marca, modelo, ano, motorizacao, combustivel, cor, quilometragem, numero_portas, transmissao, placa, preco)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(novo.marca)
        .bind(novo.modelo)
        .bind(novo.ano)
        .bind(novo.motorizacao)
        .bind(novo.combustivel)
        .bind(novo.cor)
        .bind(novo.quilometragem)
        .bind(novo.numero_portas)
        .bind(novo.transmissao)
        .bind(novo.placa)
        .bind(novo.preco)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::BadRequest(format!("Erro ao inserir automóvel: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao confirmar transação: {}", e)))?;

        Ok(automovel)
    }

    /// Atualização parcial por id. Retorna None sem gravar nada quando o
    /// id não existe; caso contrário sobrescreve somente os campos
    /// presentes (null explícito grava NULL nos campos anuláveis) e
    /// devolve o registro atualizado.
    pub async fn atualizar(
        &self,
        id: i32,
        campos: AtualizacaoAutomovel,
    ) -> AppResult<Option<Automovel>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao abrir transação: {}", e)))?;

        let atual = sqlx::query_as::<_, Automovel>("SELECT * FROM automoveis WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao buscar automóvel: {}", e)))?;

        let Some(atual) = atual else {
            return Ok(None);
        };

        let automovel = sqlx::query_as::<_, Automovel>(
            r#"
            UPDATE automoveis
            SET marca = $2, modelo = $3, ano = $4, motorizacao = $5, combustivel = $6, cor = $7, quilometragem = $8, numero_portas = $9, transmissao = $10, placa = $11, preco = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(campos.marca.unwrap_or(atual.marca))
        .bind(campos.modelo.unwrap_or(atual.modelo))
        .bind(campos.ano.unwrap_or(atual.ano))
        .bind(campos.motorizacao.unwrap_or(atual.motorizacao))
        .bind(campos.combustivel.unwrap_or(atual.combustivel))
        .bind(campos.cor.unwrap_or(atual.cor))
        .bind(campos.quilometragem.unwrap_or(atual.quilometragem))
        .bind(campos.numero_portas.unwrap_or(atual.numero_portas))
        .bind(campos.transmissao.unwrap_or(atual.transmissao))
        .bind(campos.placa.unwrap_or(atual.placa))
        .bind(campos.preco.unwrap_or(atual.preco))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::BadRequest(format!("Erro ao atualizar automóvel: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao confirmar transação: {}", e)))?;

        Ok(Some(automovel))
    }

    /// Remove por id e devolve o registro como estava antes da remoção.
    /// Retorna None quando o id não existe.
    pub async fn deletar(&self, id: i32) -> AppResult<Option<Automovel>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao abrir transação: {}", e)))?;

        let atual = sqlx::query_as::<_, Automovel>("SELECT * FROM automoveis WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao buscar automóvel: {}", e)))?;

        let Some(atual) = atual else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM automoveis WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao deletar automóvel: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::BadRequest(format!("Erro ao confirmar transação: {}", e)))?;

        Ok(Some(atual))
    }

    /// Lista todos os automóveis em ordem de inserção
    pub async fn listar(&self) -> AppResult<Vec<Automovel>> {
        let automoveis = sqlx::query_as::<_, Automovel>("SELECT * FROM automoveis ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Erro ao listar automóveis: {}", e)))?;

        Ok(automoveis)
    }

    /// Busca um automóvel pelo id
    pub async fn buscar_por_id(&self, id: i32) -> AppResult<Option<Automovel>> {
        let automovel = sqlx::query_as::<_, Automovel>("SELECT * FROM automoveis WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Erro ao buscar automóvel: {}", e)))?;

        Ok(automovel)
    }

    /// Busca com filtros conjuntivos. Critérios ausentes não restringem
    /// nada; filtro vazio retorna todos os registros. preco_min maior que
    /// preco_max é aceito e simplesmente produz resultado vazio.
    pub async fn buscar_com_filtros(
        &self,
        filtro: &FiltroBusca,
    ) -> AppResult<Vec<Automovel>> {
        if filtro.esta_vazio() {
            info!("Filtro vazio: retornando todos os registros");
        }

        let mut query = Self::montar_busca(filtro);

        let automoveis = query
            .build_query_as::<Automovel>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Erro ao buscar automóveis: {}", e)))?;

        info!("{} resultado(s) encontrado(s)", automoveis.len());

        Ok(automoveis)
    }

    /// Monta a query de busca aplicando os critérios presentes em ordem
    /// fixa: marca, modelo, ano, combustivel, preco_min, preco_max.
    fn montar_busca(filtro: &FiltroBusca) -> QueryBuilder<'static, Postgres> {
        let mut query: QueryBuilder<'static, Postgres> =
            QueryBuilder::new("SELECT * FROM automoveis WHERE 1=1");

        if let Some(marca) = &filtro.marca {
            query.push(" AND marca = ").push_bind(marca.clone());
            info!("Filtrando por marca: {}", marca);
        }
        if let Some(modelo) = &filtro.modelo {
            query.push(" AND modelo = ").push_bind(modelo.clone());
            info!("Filtrando por modelo: {}", modelo);
        }
        if let Some(ano) = filtro.ano {
            query.push(" AND ano = ").push_bind(ano);
            info!("Filtrando por ano: {}", ano);
        }
        if let Some(combustivel) = &filtro.combustivel {
            query.push(" AND combustivel = ").push_bind(combustivel.clone());
            info!("Filtrando por combustível: {}", combustivel);
        }
        if let Some(preco_min) = filtro.preco_min {
            query.push(" AND preco >= ").push_bind(preco_min);
            info!("Filtrando por preço mínimo: {}", preco_min);
        }
        if let Some(preco_max) = filtro.preco_max {
            query.push(" AND preco <= ").push_bind(preco_max);
            info!("Filtrando por preço máximo: {}", preco_max);
        }

        query.push(" ORDER BY id");
        query
    }
}
