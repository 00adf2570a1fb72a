//! Agente virtual de busca de carros
//!
//! Loop conversacional de turno único: faz uma pergunta por vez até
//! preencher os seis critérios de busca, extrai valores do texto livre
//! por proximidade de palavra-chave e dispara uma única chamada ao
//! endpoint de busca. "sair" encerra sem buscar.

use std::io::{self, BufRead, Write};

use regex::Regex;
use serde_json::{json, Value};

/// Ordem fixa em que os critérios são coletados
const CRITERIOS: [&str; 6] = [
    "marca",
    "modelo",
    "ano",
    "combustivel",
    "preco_min",
    "preco_max",
];

fn pergunta_para(criterio: &str) -> &'static str {
    match criterio {
        "marca" => "Qual marca você prefere?",
        "modelo" => "E o modelo, sabe qual quer?",
        "ano" => "Qual o ano do carro?",
        "combustivel" => "Qual tipo de combustível prefere?",
        "preco_min" => "Qual o valor mínimo que você pretende pagar?",
        "preco_max" => "Qual o valor máximo?",
        _ => "Me conte mais sobre o que você procura.",
    }
}

/// Extrai o token imediatamente após a palavra-chave do critério
fn extrair_valor(texto: &str, chave: &str) -> Option<String> {
    let pattern = format!(r"(?i){}\s+(\w+)", chave);
    let re = Regex::new(&pattern).ok()?;
    re.captures(texto)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extrai a primeira substring numérica do texto
fn extrair_numero(texto: &str) -> Option<i64> {
    let re = Regex::new(r"(\d+)").ok()?;
    re.captures(texto)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn formatar_carro(carro: &Value) -> String {
    format!(
        "- {} {} {}, {}, {} km, R$ {}",
        carro["marca"].as_str().unwrap_or("?"),
        carro["modelo"].as_str().unwrap_or("?"),
        carro["ano"],
        carro["cor"].as_str().unwrap_or("?"),
        carro["quilometragem"],
        carro["preco"]
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    println!("Olá! Eu sou seu assistente virtual de carros. Me conte o que você procura.");
    println!("{}", pergunta_para(CRITERIOS[0]));

    let mut filtros = serde_json::Map::new();
    let stdin = io::stdin();

    for linha in stdin.lock().lines() {
        let entrada = linha?.trim().to_string();

        if entrada.to_lowercase().contains("sair") {
            println!("Até logo! Boa sorte na busca.");
            return Ok(());
        }

        if let Some(criterio) = CRITERIOS.iter().find(|c| !filtros.contains_key(**c)) {
            match *criterio {
                // ano e preços precisam ser numéricos para a API
                "ano" | "preco_min" | "preco_max" => {
                    if let Some(numero) = extrair_numero(&entrada) {
                        filtros.insert(criterio.to_string(), json!(numero));
                    }
                }
                _ => {
                    let valor =
                        extrair_valor(&entrada, criterio).unwrap_or_else(|| entrada.clone());
                    filtros.insert(criterio.to_string(), json!(valor));
                }
            }
        }

        match CRITERIOS.iter().find(|c| !filtros.contains_key(**c)) {
            Some(proximo) => {
                println!("{}", pergunta_para(proximo));
                io::stdout().flush()?;
            }
            None => {
                println!("Buscando veículos que correspondem ao que você quer...");
                buscar_e_imprimir(&api_url, &filtros).await?;
                return Ok(());
            }
        }
    }

    Ok(())
}

/// Uma única chamada de busca seguida do resumo formatado
async fn buscar_e_imprimir(
    api_url: &str,
    filtros: &serde_json::Map<String, Value>,
) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/automoveis/search", api_url))
        .json(filtros)
        .send()
        .await?;

    if !response.status().is_success() {
        println!("Erro ao buscar no servidor.");
        return Ok(());
    }

    let carros: Vec<Value> = response.json().await?;
    if carros.is_empty() {
        println!("Desculpe, não encontrei carros com esses critérios.");
    } else {
        println!("Encontrei {} carro(s) para você:", carros.len());
        for carro in &carros {
            println!("{}", formatar_carro(carro));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrair_valor_apos_palavra_chave() {
        assert_eq!(
            extrair_valor("quero um carro da marca Toyota", "marca"),
            Some("Toyota".to_string())
        );
        assert_eq!(
            extrair_valor("Marca Fiat, por favor", "marca"),
            Some("Fiat".to_string())
        );
    }

    #[test]
    fn test_extrair_valor_sem_palavra_chave() {
        assert_eq!(extrair_valor("Corolla", "modelo"), None);
    }

    #[test]
    fn test_extrair_numero() {
        assert_eq!(extrair_numero("uns 30000 reais"), Some(30000));
        assert_eq!(extrair_numero("ano 2019"), Some(2019));
        assert_eq!(extrair_numero("não sei"), None);
    }

    #[test]
    fn test_formatar_carro() {
        let carro = serde_json::json!({
            "marca": "Toyota",
            "modelo": "Corolla",
            "ano": 2021,
            "cor": "Prata",
            "quilometragem": 30000,
            "preco": 95000.5
        });
        assert_eq!(
            formatar_carro(&carro),
            "- Toyota Corolla 2021, Prata, 30000 km, R$ 95000.5"
        );
    }
}
