//! Lectura de planillas (.xlsx)
//!
//! Solo se soporta la primera hoja, con la primera fila como encabezado.
//! No se valida ningún esquema más allá de eso.

use crate::error::{RedistribucionError, Result};
use crate::table::Table;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Lee la primera hoja de una planilla como `Table`
///
/// Las filas completamente vacías se descartan. Cada celda se convierte a
/// texto recortado; las celdas vacías quedan como `""`.
pub fn read_spreadsheet(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(RedistribucionError::FileNotFound(
            path.display().to_string(),
        ));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| RedistribucionError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            RedistribucionError::SpreadsheetRead(format!(
                "{}: la planilla no contiene hojas",
                path.display()
            ))
        })?
        .map_err(|e| RedistribucionError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let mut rows_iter = range.rows();
    let header = rows_iter.next().ok_or_else(|| {
        RedistribucionError::SpreadsheetRead(format!(
            "{}: la primera hoja está vacía",
            path.display()
        ))
    })?;

    let columns: Vec<String> = header.iter().map(cell_to_string).collect();
    let mut table = Table::new(columns);

    for row in rows_iter {
        let values: Vec<String> = row.iter().map(cell_to_string).collect();
        if values.iter().all(|v| v.is_empty()) {
            continue;
        }
        table.push_row(values)?;
    }

    Ok(table)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        _ => cell.to_string().trim().to_string(),
    }
}
