//! Generación del Word de etiquetas

use crate::error::{RedistribucionError, Result};
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const DOCX_FILE_NAME: &str = "etiquetas.docx";

/// Ancho de la línea de guiones que separa etiquetas al imprimir
const RULE_WIDTH: usize = 40;

/// Genera el documento de etiquetas en memoria
///
/// Por cada bloque de etiqueta: un párrafo por línea de texto, seguido de
/// un párrafo con una regla de guiones. Una lista vacía produce un
/// documento vacío válido.
pub fn labels_docx_buffer(labels: &[String]) -> Result<Vec<u8>> {
    let mut docx = Docx::new();

    for label in labels {
        for line in label.lines() {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
        docx = docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("-".repeat(RULE_WIDTH))),
        );
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| RedistribucionError::DocxGeneration(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Escribe `etiquetas.docx` en el directorio de salida
pub fn write_labels_docx(labels: &[String], output_dir: &Path) -> Result<PathBuf> {
    let buffer = labels_docx_buffer(labels)?;
    let path = output_dir.join(DOCX_FILE_NAME);
    std::fs::write(&path, buffer)?;
    Ok(path)
}
