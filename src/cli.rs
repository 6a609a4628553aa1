use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "redistribucion-ai")]
#[command(about = "Redistribución inteligente de packing lists entre clientes con IA", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Mostrar información detallada
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Genera la redistribución a partir del packing list y los pedidos
    Run {
        /// Packing List original (.xlsx)
        #[arg(required = true)]
        packing_list: PathBuf,

        /// Pedidos de clientes (.xlsx)
        #[arg(required = true)]
        pedidos: PathBuf,

        /// Instrucciones para el formato de etiquetas (opcional)
        #[arg(short, long)]
        instrucciones: Option<String>,

        /// Observaciones adicionales: límites por caja, prioridades, etc. (opcional)
        #[arg(short, long)]
        observaciones: Option<String>,

        /// Directorio de salida (por defecto el directorio actual)
        #[arg(short = 'd', long)]
        output: Option<PathBuf>,

        /// Guarda la respuesta cruda del modelo junto a las salidas
        #[arg(long)]
        guardar_respuesta: bool,
    },

    /// Muestra o edita la configuración
    Config {
        /// Configura la API key de Gemini
        #[arg(long)]
        set_api_key: Option<String>,

        /// Muestra la configuración actual
        #[arg(long)]
        show: bool,
    },
}
