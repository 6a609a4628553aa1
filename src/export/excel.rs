//! Generación del Excel de redistribución

use crate::error::{RedistribucionError, Result};
use crate::table::Table;
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

pub const EXCEL_FILE_NAME: &str = "redistribucion.xlsx";
const SHEET_NAME: &str = "Redistribución";

/// Genera el Excel en memoria
///
/// Una hoja, encabezado en negrita a partir de los nombres de columna,
/// una fila por fila de datos. Acepta tablas sin filas.
pub fn redistribution_excel_buffer(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| RedistribucionError::ExcelGeneration(format!("nombre de hoja: {}", e)))?;

    let header_format = Format::new().set_bold();

    for (col, name) in table.columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(|e| {
                RedistribucionError::ExcelGeneration(format!("encabezado '{}': {}", name, e))
            })?;
    }

    for (row, values) in table.rows().iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, value)
                .map_err(|e| {
                    RedistribucionError::ExcelGeneration(format!(
                        "celda ({}, {}): {}",
                        row + 1,
                        col,
                        e
                    ))
                })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| RedistribucionError::ExcelGeneration(e.to_string()))
}

/// Escribe `redistribucion.xlsx` en el directorio de salida
pub fn write_redistribution_excel(table: &Table, output_dir: &Path) -> Result<PathBuf> {
    let buffer = redistribution_excel_buffer(table)?;
    let path = output_dir.join(EXCEL_FILE_NAME);
    std::fs::write(&path, buffer)?;
    Ok(path)
}
