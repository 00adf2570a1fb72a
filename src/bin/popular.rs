//! Seeder de dados fake
//!
//! Popula a tabela automoveis com 100 veículos gerados aleatoriamente,
//! inserindo um a um pelo repositório e seguindo em frente quando uma
//! inserção falha (placa duplicada, por exemplo).

use anyhow::Result;
use dotenvy::dotenv;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{error, info};

use automoveis_api::database::DatabaseConnection;
use automoveis_api::models::NovoAutomovel;
use automoveis_api::repositories::AutomovelRepository;

const MARCAS_MODELOS: [(&str, &[&str]); 5] = [
    ("Fiat", &["Uno", "Argo", "Mobi", "Cronos"]),
    ("Chevrolet", &["Onix", "Prisma", "Tracker", "Spin"]),
    ("Volkswagen", &["Gol", "Polo", "Virtus", "T-Cross"]),
    ("Toyota", &["Corolla", "Yaris", "Hilux"]),
    ("Ford", &["Ka", "Fiesta", "EcoSport"]),
];

const MOTORIZACOES: [&str; 5] = ["1.0", "1.6", "2.0", "2.0 Turbo", "1.4 TSI"];
const COMBUSTIVEIS: [&str; 5] = ["Gasolina", "Etanol", "Flex", "Diesel", "Elétrico"];
const CORES: [&str; 6] = ["Branco", "Preto", "Prata", "Vermelho", "Cinza", "Azul"];
const TRANSMISSOES: [&str; 4] = ["Manual", "Automático", "CVT", "Automatizado"];

/// Placa aleatória no padrão Mercosul (LLLNLNN)
fn gerar_placa(rng: &mut impl Rng) -> String {
    (0..7)
        .map(|posicao| match posicao {
            3 | 5 | 6 => char::from(b'0' + rng.gen_range(0..10)),
            _ => char::from(b'A' + rng.gen_range(0..26)),
        })
        .collect()
}

fn gerar_automovel_fake(rng: &mut impl Rng) -> NovoAutomovel {
    let (marca, modelos) = MARCAS_MODELOS.choose(rng).unwrap();
    let modelo = modelos.choose(rng).unwrap();
    let preco = rng.gen_range(20_000.0..180_000.0);

    NovoAutomovel {
        marca: marca.to_string(),
        modelo: modelo.to_string(),
        ano: rng.gen_range(2010..=2024),
        motorizacao: Some(MOTORIZACOES.choose(rng).unwrap().to_string()),
        combustivel: Some(COMBUSTIVEIS.choose(rng).unwrap().to_string()),
        cor: Some(CORES.choose(rng).unwrap().to_string()),
        quilometragem: Some(rng.gen_range(0..=200_000)),
        numero_portas: Some(*[2, 3, 4].choose(rng).unwrap()),
        transmissao: Some(TRANSMISSOES.choose(rng).unwrap().to_string()),
        placa: Some(gerar_placa(rng)),
        preco: Decimal::from_f64_retain(preco).map(|d| d.round_dp(2)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let db_connection = DatabaseConnection::new_default().await?;
    db_connection.run_migrations().await?;

    let repository = AutomovelRepository::new(db_connection.pool().clone());
    let mut rng = rand::thread_rng();

    let quantidade = 100;
    let mut inseridos = 0;

    for _ in 0..quantidade {
        let veiculo = gerar_automovel_fake(&mut rng);
        match repository.inserir(veiculo).await {
            Ok(automovel) => {
                inseridos += 1;
                info!(
                    "Inserido: {} {} {} (id {})",
                    automovel.marca, automovel.modelo, automovel.ano, automovel.id
                );
            }
            Err(e) => error!("Erro ao inserir veículo: {}", e),
        }
    }

    info!("{} veículo(s) inserido(s) com sucesso.", inseridos);
    Ok(())
}
