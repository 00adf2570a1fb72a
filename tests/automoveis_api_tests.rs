//! Testes de integração do repositório de automóveis
//!
//! Exigem um PostgreSQL acessível via DATABASE_URL e por isso ficam
//! marcados com #[ignore]. Rodar com:
//!   DATABASE_URL=postgres://... cargo test -- --ignored

use rust_decimal::Decimal;
use sqlx::PgPool;

use automoveis_api::controllers::AutomovelController;
use automoveis_api::models::{AtualizacaoAutomovel, FiltroBusca, NovoAutomovel};
use automoveis_api::repositories::AutomovelRepository;
use automoveis_api::utils::errors::AppError;

async fn pool_de_teste() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL deve apontar para um banco de teste");
    let pool = PgPool::connect(&url).await.expect("falha ao conectar no banco de teste");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("falha ao executar migrações");
    pool
}

/// Placa única por execução para não colidir com o constraint UNIQUE
fn placa_unica() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("T{:06}", nanos % 1_000_000)
}

fn novo_corolla() -> NovoAutomovel {
    NovoAutomovel {
        marca: "Toyota".to_string(),
        modelo: "Corolla".to_string(),
        ano: 2021,
        motorizacao: Some("2.0".to_string()),
        combustivel: Some("Flex".to_string()),
        cor: Some("Prata".to_string()),
        quilometragem: Some(30000),
        numero_portas: Some(4),
        transmissao: Some("Automático".to_string()),
        placa: Some(placa_unica()),
        preco: Some(Decimal::new(9500050, 2)),
    }
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn insercao_atribui_id_positivo_e_preserva_campos() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let novo = novo_corolla();
    let placa = novo.placa.clone();
    let inserido = repository.inserir(novo).await.unwrap();

    assert!(inserido.id > 0);
    assert_eq!(inserido.marca, "Toyota");
    assert_eq!(inserido.modelo, "Corolla");
    assert_eq!(inserido.ano, 2021);
    assert_eq!(inserido.placa, placa);
    assert_eq!(inserido.preco, Some(Decimal::new(9500050, 2)));
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn atualizar_e_deletar_id_inexistente_retornam_none() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let resultado = repository
        .atualizar(-1, AtualizacaoAutomovel::default())
        .await
        .unwrap();
    assert!(resultado.is_none());

    let resultado = repository.deletar(-1).await.unwrap();
    assert!(resultado.is_none());
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn atualizacao_parcial_preserva_campos_nao_informados() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let inserido = repository.inserir(novo_corolla()).await.unwrap();

    let campos = AtualizacaoAutomovel {
        cor: Some(Some("Laranja Neon".to_string())),
        preco: Some(Some(Decimal::new(9999999, 2))),
        ..Default::default()
    };
    let atualizado = repository.atualizar(inserido.id, campos).await.unwrap().unwrap();

    assert_eq!(atualizado.cor.as_deref(), Some("Laranja Neon"));
    assert_eq!(atualizado.preco, Some(Decimal::new(9999999, 2)));
    // campos não informados permanecem como antes
    assert_eq!(atualizado.marca, inserido.marca);
    assert_eq!(atualizado.modelo, inserido.modelo);
    assert_eq!(atualizado.ano, inserido.ano);
    assert_eq!(atualizado.quilometragem, inserido.quilometragem);

    // a leitura por id reflete a atualização
    let relido = repository.buscar_por_id(inserido.id).await.unwrap().unwrap();
    assert_eq!(relido, atualizado);
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn null_explicito_limpa_campo_anulavel() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let inserido = repository.inserir(novo_corolla()).await.unwrap();
    assert!(inserido.placa.is_some());

    // placa: null no payload vira Some(None) e grava NULL no banco
    let campos = AtualizacaoAutomovel {
        placa: Some(None),
        ..Default::default()
    };
    let atualizado = repository.atualizar(inserido.id, campos).await.unwrap().unwrap();

    assert_eq!(atualizado.placa, None);
    // os demais campos permanecem como antes
    assert_eq!(atualizado.cor, inserido.cor);
    assert_eq!(atualizado.preco, inserido.preco);
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn deletar_devolve_snapshot_e_remove_registro() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let inserido = repository.inserir(novo_corolla()).await.unwrap();

    let deletado = repository.deletar(inserido.id).await.unwrap().unwrap();
    assert_eq!(deletado.id, inserido.id);
    assert_eq!(deletado.placa, inserido.placa);

    let resultado = repository.buscar_por_id(inserido.id).await.unwrap();
    assert!(resultado.is_none());
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn busca_sem_criterios_retorna_todos_os_registros() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let inserido = repository.inserir(novo_corolla()).await.unwrap();

    let todos = repository.listar().await.unwrap();
    let buscados = repository
        .buscar_com_filtros(&FiltroBusca::default())
        .await
        .unwrap();

    assert_eq!(buscados.len(), todos.len());
    assert!(buscados.iter().any(|a| a.id == inserido.id));
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn faixa_de_preco_invertida_retorna_vazio_sem_erro() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    repository.inserir(novo_corolla()).await.unwrap();

    let filtro = FiltroBusca {
        preco_min: Some(Decimal::new(8000000, 2)),
        preco_max: Some(Decimal::new(3000000, 2)),
        ..Default::default()
    };
    let resultado = repository.buscar_com_filtros(&filtro).await.unwrap();
    assert!(resultado.is_empty());
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn busca_por_marca_encontra_e_marca_inexistente_retorna_vazio() {
    let pool = pool_de_teste().await;
    let repository = AutomovelRepository::new(pool);

    let inserido = repository.inserir(novo_corolla()).await.unwrap();

    let filtro = FiltroBusca {
        marca: Some("Toyota".to_string()),
        ..Default::default()
    };
    let toyotas = repository.buscar_com_filtros(&filtro).await.unwrap();
    assert!(toyotas.iter().any(|a| a.id == inserido.id));

    let filtro = FiltroBusca {
        marca: Some("Honda".to_string()),
        ..Default::default()
    };
    let hondas = repository.buscar_com_filtros(&filtro).await.unwrap();
    assert!(hondas.is_empty());
}

#[tokio::test]
#[ignore = "requer PostgreSQL em DATABASE_URL"]
async fn controller_mapeia_id_ausente_para_not_found() {
    let pool = pool_de_teste().await;
    let controller = AutomovelController::new(pool);

    let erro = controller.buscar_por_id(-1).await.unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));

    let erro = controller.deletar(-1).await.unwrap_err();
    assert!(matches!(erro, AppError::NotFound(_)));
}
