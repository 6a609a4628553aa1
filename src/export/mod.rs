pub mod docx;
pub mod excel;

use crate::error::Result;
use crate::table::Table;
use std::path::{Path, PathBuf};

/// Rutas de los archivos generados en una corrida
pub struct ExportedFiles {
    pub excel: PathBuf,
    pub docx: PathBuf,
}

/// Escribe el Excel de redistribución y el Word de etiquetas
///
/// Los nombres de archivo son fijos; solo varía el directorio de salida.
pub fn export_outputs(table: &Table, labels: &[String], output_dir: &Path) -> Result<ExportedFiles> {
    let excel = excel::write_redistribution_excel(table, output_dir)?;
    let docx = docx::write_labels_docx(labels, output_dir)?;
    Ok(ExportedFiles { excel, docx })
}
