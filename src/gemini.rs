//! Cliente de la API de Gemini
//!
//! Una sola llamada saliente por ejecución: `generateContent` con el prompt
//! completo y parámetros de decodificación fijos. Sin reintentos, sin
//! streaming, sin contexto entre llamadas.

use crate::error::{RedistribucionError, Result};
use serde_json::{json, Value};
use std::time::Duration;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Parámetros de decodificación fijos, no configurables por el usuario
const MAX_OUTPUT_TOKENS: u32 = 8192;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;
const TOP_K: u32 = 40;

/// Cliente del servicio de generación de texto
///
/// La credencial y el modelo se reciben en la construcción; no hay estado
/// global de configuración.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                RedistribucionError::ApiCall(format!("no se pudo crear el cliente HTTP: {}", e))
            })?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// Envía el prompt y devuelve el texto generado completo
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RedistribucionError::ApiCall(
                        "la API no respondió a tiempo (timeout)".to_string(),
                    )
                } else if e.is_connect() {
                    RedistribucionError::ApiCall(
                        "no se pudo conectar con el servicio de Gemini".to_string(),
                    )
                } else {
                    RedistribucionError::ApiCall(format!("error de red: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                400 | 401 | 403 => RedistribucionError::ApiCall(format!(
                    "credencial rechazada ({}): {}",
                    status,
                    text.trim()
                )),
                429 => RedistribucionError::ApiCall(
                    "límite de uso de la API excedido (429)".to_string(),
                ),
                _ => RedistribucionError::ApiCall(format!("HTTP {}: {}", status, text.trim())),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| RedistribucionError::ApiParse(format!("JSON inválido: {}", e)))?;

        extract_text(&payload)
    }
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "maxOutputTokens": MAX_OUTPUT_TOKENS,
            "temperature": TEMPERATURE,
            "topP": TOP_P,
            "topK": TOP_K
        }
    })
}

/// Extrae el texto del primer candidato de la respuesta
fn extract_text(payload: &Value) -> Result<String> {
    // rechazo por filtros de seguridad
    if let Some(reason) = payload["promptFeedback"]["blockReason"].as_str() {
        return Err(RedistribucionError::ApiCall(format!(
            "la API rechazó el prompt: {}",
            reason
        )));
    }

    payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.to_string())
        .ok_or_else(|| {
            RedistribucionError::ApiParse("la respuesta no contiene texto generado".into())
        })
}
