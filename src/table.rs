//! Tablas en memoria
//!
//! Contenedor tabular compartido por todo el flujo:
//! - las planillas subidas se cargan como `Table`
//! - la tabla de redistribución que devuelve la IA se materializa como `Table`
//! - el Excel de salida se genera desde una `Table`
//!
//! Invariante: todas las filas tienen exactamente una celda por columna,
//! en el orden de inserción.

use crate::error::{RedistribucionError, Result};

/// Tabla ordenada: secuencia de columnas declarada + filas uniformes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Agrega una fila al final
    ///
    /// Falla si el ancho de la fila no coincide con la cantidad de columnas.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(RedistribucionError::InvalidTable(format!(
                "la fila {} tiene {} celdas pero la tabla tiene {} columnas",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cantidad de filas de datos (sin contar el encabezado)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Valor de una celda por índice de fila y nombre de columna
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// Render en formato de tabla markdown alineada
    ///
    /// Es el texto que se incrusta en el prompt:
    ///
    /// ```text
    /// | Caja | Producto |
    /// | ---- | -------- |
    /// | 1    | Remera   |
    /// ```
    pub fn to_markdown(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        // el separador necesita al menos tres guiones
        for w in widths.iter_mut() {
            *w = (*w).max(3);
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(&self.columns, &widths));
        lines.push(format!(
            "| {} |",
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join(" | ")
        ));
        for row in &self.rows {
            lines.push(format_row(row, &widths));
        }
        lines.join("\n")
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec!["Caja".into(), "Producto".into()]);
        table.push_row(vec!["1".into(), "Remera".into()]).unwrap();
        table.push_row(vec!["2".into(), "Pantalón".into()]).unwrap();
        table
    }

    // =============================================
    // push_row / accessors
    // =============================================

    #[test]
    fn test_push_row_preserves_order() {
        let table = sample_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], vec!["1", "Remera"]);
        assert_eq!(table.rows()[1], vec!["2", "Pantalón"]);
    }

    #[test]
    fn test_push_row_wrong_width() {
        let mut table = Table::new(vec!["A".into(), "B".into()]);
        let result = table.push_row(vec!["solo una celda".into()]);
        assert!(matches!(
            result,
            Err(RedistribucionError::InvalidTable(_))
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_value_by_column_name() {
        let table = sample_table();
        assert_eq!(table.value(0, "Producto"), Some("Remera"));
        assert_eq!(table.value(1, "Caja"), Some("2"));
        assert_eq!(table.value(0, "Inexistente"), None);
        assert_eq!(table.value(9, "Caja"), None);
    }

    // =============================================
    // to_markdown
    // =============================================

    #[test]
    fn test_to_markdown_contains_pipes_and_separator() {
        let md = sample_table().to_markdown();
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("| Caja"));
        assert!(lines[0].contains("Producto"));
        assert!(lines[1].contains("---"));
        assert!(lines[2].contains("Remera"));
        assert!(lines[3].contains("Pantalón"));
    }

    #[test]
    fn test_to_markdown_alignment() {
        let md = sample_table().to_markdown();
        let widths: Vec<usize> = md.lines().map(|l| l.chars().count()).collect();
        // todas las líneas quedan alineadas al mismo ancho
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_to_markdown_empty_table() {
        let table = Table::new(Vec::new());
        assert_eq!(table.to_markdown(), "");
    }

    #[test]
    fn test_to_markdown_header_only() {
        let table = Table::new(vec!["A".into()]);
        let md = table.to_markdown();
        assert_eq!(md.lines().count(), 2);
        assert!(md.lines().nth(1).unwrap().contains("---"));
    }
}
