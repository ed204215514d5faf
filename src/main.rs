//! # File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos HTTP/1.0.

use file_server::config::Config;
use file_server::server::Server;

fn main() {
    println!("=================================");
    println!("  File Server HTTP/1.0");
    println!("=================================\n");

    // Configuración desde CLI y variables de entorno, una sola vez
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Iniciar el servidor (esto bloqueará el thread)
    let server = Server::new(config);
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
