use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedistribucionError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("API key no configurada. Usá `redistribucion-ai config --set-api-key TU_KEY` para configurarla")]
    MissingApiKey,

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("Error al leer la planilla: {0}")]
    SpreadsheetRead(String),

    #[error("Error al llamar a la API: {0}")]
    ApiCall(String),

    #[error("Respuesta de la API inválida: {0}")]
    ApiParse(String),

    #[error("No se pudo procesar la tabla: {0}")]
    InvalidTable(String),

    #[error("Error al generar el Excel: {0}")]
    ExcelGeneration(String),

    #[error("Error al generar el Word: {0}")]
    DocxGeneration(String),

    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error de IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RedistribucionError>;
