use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use redistribucion_ai::{cli, config, export, gemini, parser, prompt, reader};

use cli::{Cli, Commands};
use config::Config;
use redistribucion_ai::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            packing_list,
            pedidos,
            instrucciones,
            observaciones,
            output,
            guardar_respuesta,
        } => {
            println!("📦 redistribucion-ai - Redistribución con IA\n");

            // la credencial se resuelve antes de tocar nada
            let api_key = config.get_api_key()?;

            // 1. Lectura de planillas
            println!("[1/4] Leyendo planillas...");
            let packing = reader::read_spreadsheet(&packing_list)?;
            let orders = reader::read_spreadsheet(&pedidos)?;
            println!("✔ Packing list: {} filas", packing.len());
            println!("✔ Pedidos: {} filas\n", orders.len());

            // 2. Prompt + llamada a Gemini
            println!("[2/4] Consultando a Gemini...");
            let prompt_text = prompt::build_redistribution_prompt(
                &packing.to_markdown(),
                &orders.to_markdown(),
                instrucciones.as_deref().unwrap_or(""),
                observaciones.as_deref().unwrap_or(""),
            );
            if cli.verbose {
                println!("  Prompt: {} caracteres", prompt_text.chars().count());
            }

            let client = gemini::GeminiClient::new(
                api_key,
                config.model.clone(),
                config.timeout_seconds,
            )?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("🧠 Pensando con IA...");
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));

            let respuesta = client.generate(&prompt_text).await;
            spinner.finish_and_clear();
            let respuesta = respuesta?;

            println!("✔ Respuesta recibida ({} caracteres)\n", respuesta.chars().count());

            // 3. Procesamiento de la respuesta
            println!("[3/4] Procesando respuesta...");
            let parsed = parser::split_response(&respuesta);

            // la explicación se muestra antes de materializar la tabla:
            // si la tabla viene mal formada, la explicación ya quedó visible
            if !parsed.explanation.is_empty() {
                println!("\n🧠 Explicación generada por la IA:\n");
                println!("{}\n", parsed.explanation);
            }

            let tabla = parser::parse_markdown_table(&parsed.table_text)?;
            println!("✔ Tabla de redistribución: {} filas", tabla.len());
            println!("✔ Etiquetas: {}\n", parsed.labels.len());

            // 4. Exportación
            println!("[4/4] Generando archivos...");
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let files = export::export_outputs(&tabla, &parsed.labels, &output_dir)?;
            println!("✔ Excel de redistribución: {}", files.excel.display());
            println!("✔ Etiquetas (Word): {}", files.docx.display());

            if guardar_respuesta {
                let raw_path = output_dir.join("respuesta.txt");
                std::fs::write(&raw_path, &respuesta)?;
                println!("✔ Respuesta cruda: {}", raw_path.display());
            }

            println!("\n✅ Redistribución generada correctamente");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key configurada");
            }

            if show {
                println!("Configuración:");
                println!("  Modelo: {}", config.model);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!(
                    "  API key: {}",
                    if config.api_key.is_some() {
                        "configurada"
                    } else {
                        "no configurada"
                    }
                );
            }
        }
    }

    Ok(())
}
