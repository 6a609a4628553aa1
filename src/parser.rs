//! Procesamiento de la respuesta del modelo
//!
//! La respuesta es texto libre con tres secciones delimitadas por
//! encabezados literales:
//! - `EXPLICACIÓN:` seguida de la lógica de redistribución
//! - `TABLA DE REDISTRIBUCIÓN:` seguida de una tabla markdown
//! - `ETIQUETAS:` seguida de bloques de etiqueta separados por `---`
//!
//! La segmentación es tolerante: un marcador ausente o duplicado degrada
//! a secciones vacías, nunca falla. La materialización de la tabla sí
//! valida el formato y devuelve errores descriptivos.

use crate::error::{RedistribucionError, Result};
use crate::table::Table;

pub const EXPLANATION_MARKER: &str = "EXPLICACIÓN:";
pub const TABLE_MARKER: &str = "TABLA DE REDISTRIBUCIÓN:";
pub const LABELS_MARKER: &str = "ETIQUETAS:";
pub const LABEL_SEPARATOR: &str = "---";

/// Secciones recuperadas de la respuesta del modelo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedResponse {
    pub explanation: String,
    pub table_text: String,
    pub labels: Vec<String>,
}

/// Segmenta la respuesta en explicación, texto de tabla y etiquetas
///
/// Función total: cualquier entrada produce un `ParsedResponse`, con
/// secciones vacías donde los marcadores falten o estén repetidos.
pub fn split_response(response: &str) -> ParsedResponse {
    let (body, labels) = split_labels(response);
    let (explanation, table_text) = split_body(body);
    ParsedResponse {
        explanation,
        table_text,
        labels,
    }
}

/// Separa los bloques de etiqueta del resto de la respuesta
///
/// Las etiquetas solo se reconocen si `ETIQUETAS:` aparece exactamente una
/// vez; el cuerpo es siempre lo que precede a la primera aparición (o el
/// texto completo si no aparece).
fn split_labels(response: &str) -> (&str, Vec<String>) {
    let mut parts = response.split(LABELS_MARKER);
    let body = parts.next().unwrap_or(response);

    let labels = match (parts.next(), parts.next()) {
        (Some(tail), None) => tail
            .split(LABEL_SEPARATOR)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(String::from)
            .collect(),
        // marcador ausente o repetido: lista vacía
        _ => Vec::new(),
    };

    (body, labels)
}

/// Separa explicación y texto de tabla dentro del cuerpo
fn split_body(body: &str) -> (String, String) {
    let mut parts = body.split(TABLE_MARKER);
    let head = parts.next().unwrap_or(body);

    match (parts.next(), parts.next()) {
        (Some(table_text), None) => (
            head.replace(EXPLANATION_MARKER, "").trim().to_string(),
            table_text.trim().to_string(),
        ),
        // marcador ausente o repetido: ambas secciones vacías
        _ => (String::new(), String::new()),
    }
}

/// Materializa el texto de tabla markdown como `Table`
///
/// Se conservan solo las líneas con `|` que no contengan `---` (eso
/// elimina la fila divisoria del formato markdown). Deben quedar al menos
/// tres líneas; el umbral viene del comportamiento original y puede
/// rechazar tablas legítimamente cortas.
pub fn parse_markdown_table(table_text: &str) -> Result<Table> {
    if !table_text.contains('|') {
        return Err(RedistribucionError::InvalidTable(
            "la tabla generada por la IA no tiene formato markdown válido".into(),
        ));
    }

    let lines: Vec<&str> = table_text
        .trim()
        .lines()
        .filter(|line| line.contains('|') && !line.contains(LABEL_SEPARATOR))
        .collect();

    if lines.len() < 3 {
        return Err(RedistribucionError::InvalidTable(
            "la tabla es demasiado corta o está mal estructurada".into(),
        ));
    }

    let mut table = Table::new(split_row(lines[0]));

    for (index, line) in lines.iter().enumerate().skip(1) {
        let mut cells = split_row(line);
        if cells.len() > table.columns().len() {
            return Err(RedistribucionError::InvalidTable(format!(
                "la fila {} tiene más columnas que el encabezado",
                index + 1
            )));
        }
        cells.resize(table.columns().len(), String::new());

        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        table.push_row(cells)?;
    }

    Ok(table)
}

/// Divide una línea en celdas por `|`
///
/// Un pipe inicial o final produce una celda vacía en el extremo, que se
/// descarta; las líneas sin pipes externos conservan todas sus celdas.
fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut cells: Vec<String> = trimmed
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect();

    if trimmed.starts_with('|') && !cells.is_empty() {
        cells.remove(0);
    }
    if trimmed.ends_with('|') && !cells.is_empty() {
        cells.pop();
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = "EXPLICACIÓN:\nSe priorizó no dividir cajas.\n\nTABLA DE REDISTRIBUCIÓN:\n| Caja nueva | Cliente | Caja original |\n| --- | --- | --- |\n| 1 | Acme | 3 |\n| 2 | Belgrano | 1 |\n\nETIQUETAS:\nCliente: Acme\nCaja nueva: 1\n---\nCliente: Belgrano\nCaja nueva: 2\n";

    // =============================================
    // split_response: respuesta bien formada
    // =============================================

    #[test]
    fn test_split_response_well_formed() {
        let parsed = split_response(FULL_RESPONSE);

        assert_eq!(parsed.explanation, "Se priorizó no dividir cajas.");
        assert!(parsed.table_text.starts_with("| Caja nueva"));
        assert!(parsed.table_text.ends_with("| 2 | Belgrano | 1 |"));
        assert_eq!(parsed.labels.len(), 2);
        assert_eq!(parsed.labels[0], "Cliente: Acme\nCaja nueva: 1");
        assert_eq!(parsed.labels[1], "Cliente: Belgrano\nCaja nueva: 2");
    }

    #[test]
    fn test_split_response_trims_sections() {
        let response = "EXPLICACIÓN:\n\n   texto   \n\nTABLA DE REDISTRIBUCIÓN:\n\n  | A |  \n\nETIQUETAS:\n  uno  \n---\n  dos  ";
        let parsed = split_response(response);

        assert_eq!(parsed.explanation, "texto");
        assert_eq!(parsed.table_text, "| A |");
        assert_eq!(parsed.labels, vec!["uno", "dos"]);
    }

    #[test]
    fn test_split_response_discards_empty_label_blocks() {
        let response = "TABLA DE REDISTRIBUCIÓN:\n| A |\nETIQUETAS:\nuno\n---\n   \n---\ndos\n---\n";
        let parsed = split_response(response);

        assert_eq!(parsed.labels, vec!["uno", "dos"]);
    }

    // =============================================
    // split_response: marcadores ausentes o repetidos
    // =============================================

    #[test]
    fn test_split_response_missing_labels_marker() {
        let response = "EXPLICACIÓN:\nalgo\nTABLA DE REDISTRIBUCIÓN:\n| A |";
        let parsed = split_response(response);

        assert!(parsed.labels.is_empty());
        assert_eq!(parsed.explanation, "algo");
        assert_eq!(parsed.table_text, "| A |");
    }

    #[test]
    fn test_split_response_duplicated_labels_marker() {
        let response = "TABLA DE REDISTRIBUCIÓN:\n| A |\nETIQUETAS:\nuno\nETIQUETAS:\ndos";
        let parsed = split_response(response);

        // marcador repetido: ninguna etiqueta, pero el cuerpo sigue siendo
        // lo anterior a la primera aparición
        assert!(parsed.labels.is_empty());
        assert_eq!(parsed.table_text, "| A |");
    }

    #[test]
    fn test_split_response_missing_table_marker() {
        let response = "EXPLICACIÓN:\nsolo explicación\nETIQUETAS:\nuna etiqueta";
        let parsed = split_response(response);

        assert_eq!(parsed.explanation, "");
        assert_eq!(parsed.table_text, "");
        assert_eq!(parsed.labels, vec!["una etiqueta"]);
    }

    #[test]
    fn test_split_response_duplicated_table_marker() {
        let response =
            "EXPLICACIÓN:\nx\nTABLA DE REDISTRIBUCIÓN:\n| A |\nTABLA DE REDISTRIBUCIÓN:\n| B |";
        let parsed = split_response(response);

        assert_eq!(parsed.explanation, "");
        assert_eq!(parsed.table_text, "");
    }

    #[test]
    fn test_split_response_empty_input() {
        let parsed = split_response("");
        assert_eq!(parsed, ParsedResponse::default());
    }

    #[test]
    fn test_split_response_explanation_marker_removed_everywhere() {
        let response = "EXPLICACIÓN: a EXPLICACIÓN: b\nTABLA DE REDISTRIBUCIÓN:\n| A |";
        let parsed = split_response(response);

        assert_eq!(parsed.explanation, "a  b");
    }

    #[test]
    fn test_split_response_idempotent() {
        let first = split_response(FULL_RESPONSE);
        let second = split_response(FULL_RESPONSE);
        assert_eq!(first, second);
    }

    // =============================================
    // parse_markdown_table: errores de formato
    // =============================================

    #[test]
    fn test_table_without_pipes() {
        let result = parse_markdown_table("no table here");
        assert!(matches!(
            result,
            Err(RedistribucionError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_table_too_short() {
        // tras eliminar la fila divisoria queda una sola línea
        let result = parse_markdown_table("H1|H2\n---|---");
        assert!(matches!(
            result,
            Err(RedistribucionError::InvalidTable(_))
        ));
    }

    #[test]
    fn test_table_row_wider_than_header() {
        let result = parse_markdown_table("H1|H2\nA|B\nC|D|E");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("fila 3"));
    }

    // =============================================
    // parse_markdown_table: casos válidos
    // =============================================

    #[test]
    fn test_table_basic() {
        let table = parse_markdown_table("H1|H2\nA|B\nC|D\n---|---").unwrap();

        assert_eq!(table.columns(), ["H1", "H2"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(0, "H1"), Some("A"));
        assert_eq!(table.value(0, "H2"), Some("B"));
        assert_eq!(table.value(1, "H1"), Some("C"));
        assert_eq!(table.value(1, "H2"), Some("D"));
    }

    #[test]
    fn test_table_with_outer_pipes() {
        let text = "| Caja | Cliente |\n| --- | --- |\n| 1 | Acme |\n| 2 | Belgrano |";
        let table = parse_markdown_table(text).unwrap();

        assert_eq!(table.columns(), ["Caja", "Cliente"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "Cliente"), Some("Belgrano"));
    }

    #[test]
    fn test_table_trims_headers_and_cells() {
        let table = parse_markdown_table("|  H1  |  H2  |\n| a | b |\n| c | d |").unwrap();

        assert_eq!(table.columns(), ["H1", "H2"]);
        assert_eq!(table.value(0, "H1"), Some("a"));
    }

    #[test]
    fn test_table_drops_empty_rows() {
        let table = parse_markdown_table("H1|H2\nA|B\n | \nC|D").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "H1"), Some("C"));
    }

    #[test]
    fn test_table_pads_short_rows() {
        let table = parse_markdown_table("H1|H2|H3\nA|B|C\nD|E").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, "H3"), Some(""));
    }

    #[test]
    fn test_table_ignores_surrounding_prose() {
        // el modelo a veces agrega texto antes o después de la tabla;
        // las líneas sin pipes se descartan
        let text = "Aquí está la tabla:\n| H1 | H2 |\n| --- | --- |\n| a | b |\n| c | d |\nFin.";
        let table = parse_markdown_table(text).unwrap();

        assert_eq!(table.columns(), ["H1", "H2"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_idempotent() {
        let text = "| H1 | H2 |\n| a | b |\n| c | d |";
        let first = parse_markdown_table(text).unwrap();
        let second = parse_markdown_table(text).unwrap();
        assert_eq!(first, second);
    }

    // =============================================
    // flujo completo: respuesta → tabla
    // =============================================

    #[test]
    fn test_full_response_to_table() {
        let parsed = split_response(FULL_RESPONSE);
        let table = parse_markdown_table(&parsed.table_text).unwrap();

        assert_eq!(table.columns(), ["Caja nueva", "Cliente", "Caja original"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(0, "Cliente"), Some("Acme"));
        assert_eq!(table.value(1, "Caja original"), Some("1"));
    }

    #[test]
    fn test_malformed_response_degrades_then_table_fails() {
        // sin marcadores: la segmentación no falla, la materialización sí
        let parsed = split_response("respuesta sin ningún marcador");
        assert_eq!(parsed.table_text, "");

        let result = parse_markdown_table(&parsed.table_text);
        assert!(result.is_err());
    }
}
