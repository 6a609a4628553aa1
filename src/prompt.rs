//! Generación del prompt de redistribución
//!
//! Una sola plantilla fija con cuatro puntos de sustitución:
//! packing list, pedidos, instrucciones y observaciones.
//! Es interpolación de texto pura: no escapa ni valida las entradas.

/// Arma el prompt completo para el modelo
///
/// # Arguments
/// * `packing_list` - render markdown del packing list original
/// * `orders` - render markdown de la tabla de pedidos
/// * `instructions` - instrucciones para el formato de etiquetas (puede ser vacío)
/// * `observations` - observaciones adicionales (puede ser vacío)
pub fn build_redistribution_prompt(
    packing_list: &str,
    orders: &str,
    instructions: &str,
    observations: &str,
) -> String {
    format!(
        r#"Eres un experto en logística y distribución inteligente de productos. Se te proporcionará un listado de cajas (Packing List) con su contenido original, y una tabla con los pedidos de diferentes clientes.

Tu tarea es:
1. Analizar ambos documentos.
2. Proponer la redistribución más eficiente de las cajas entre los clientes, intentando minimizar la división del contenido original si es posible y respetando observaciones e instrucciones específicas.
3. Indicar si queda mercadería en stock, que no sera redistribuida a ninguno de los clientes.
4. Generar una explicación clara de la lógica utilizada.
5. Generar una tabla de redistribución con las cajas y sus contenidos, y referencia a la caja original.

6. Generar el contenido de las etiquetas para cada nueva caja, separadas por "---" entre una y otra. Cada etiqueta debe incluir:
- Todo lo descripto en las instrucciones adicionales y observaciones
- Nombre del cliente
- Número de caja nueva
- Caja original de referencia
- Descripción del producto
- Talle/variante + cantidad


⚠️ Importante:
- La tabla debe ser completa, sin omisiones ni cortes.
- No resumir resultados, mostrar todas las filas aunque sean muchas.
- El contenido debe estar correctamente alineado con separadores `|` para que pueda ser procesado como tabla markdown.
- Separar las tres secciones con los encabezados:
  EXPLICACIÓN:
  TABLA DE REDISTRIBUCIÓN:
  ETIQUETAS:

Datos proporcionados:
Packing List:
{packing_list}

Pedidos de Clientes:
{orders}

Instrucciones adicionales:
{instructions}

Observaciones:
{observations}
"#
    )
}
