//! # Cliente GET Interactivo
//! src/bin/get_client.rs
//!
//! Pide una URL en un loop: las direcciones del servidor local se piden por
//! TCP crudo y se muestra la respuesta completa, con opción de abrirla en
//! el navegador; cualquier otra entrada se abre directo en el navegador.

use clap::Parser;
use file_server::client;
use std::io::Write;
use std::net::TcpStream;

/// Ruta que se pide cuando el usuario no da ninguna
const DEFAULT_PATH: &str = "/main/index.html";

/// Cliente interactivo de descarga del servidor de archivos
#[derive(Debug, Parser)]
#[command(name = "get_client")]
#[command(about = "Cliente GET interactivo del servidor de archivos")]
#[command(version = "0.1.0")]
struct Args {
    /// Host del servidor local
    #[arg(long, default_value = "127.0.0.1", env = "SERVER_HOST")]
    host: String,

    /// Puerto del servidor local
    #[arg(short, long, default_value = "8080", env = "SERVER_PORT")]
    port: u16,
}

fn main() {
    let args = Args::parse();

    loop {
        let input = match client::prompt(&format!(
            "URL del servidor (ej: {} o una URL externa, Enter o 'quit' para salir): ",
            args.host
        )) {
            Some(input) => input,
            None => {
                println!("Programa terminado.");
                break;
            }
        };

        if let Some(path) = local_path(&input, &args.host) {
            fetch_and_display(&args, &path);
        } else {
            open_external(&input);
        }
    }
}

/// Si la entrada apunta al servidor local, la ruta HTTP a pedir
///
/// El host pelado equivale a la página principal; una ruta sin `/`
/// inicial lo recibe.
fn local_path(input: &str, host: &str) -> Option<String> {
    if input == host {
        return Some(DEFAULT_PATH.to_string());
    }

    let rest = input.strip_prefix(host)?;
    if rest.is_empty() {
        Some(DEFAULT_PATH.to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        Some(format!("/{}", rest))
    }
}

/// Pide una ruta al servidor local y muestra la respuesta completa
fn fetch_and_display(args: &Args, path: &str) {
    let address = format!("{}:{}", args.host, args.port);

    let mut stream = match TcpStream::connect(&address) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("No se pudo conectar a {}: {}", address, e);
            return;
        }
    };

    let request = client::build_get_request(path, &args.host);
    if let Err(e) = stream.write_all(request.as_bytes()) {
        eprintln!("No se pudo enviar el request: {}", e);
        return;
    }

    let reply = match client::read_reply(&mut stream) {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("No llegó respuesta: {}", e);
            return;
        }
    };

    println!("Respuesta recibida:");
    println!("{}", reply.status_line);
    println!();
    println!("{}", reply.body_text());

    if let Some(choice) = client::prompt("¿Abrir en el navegador? (Y/N): ") {
        if choice.eq_ignore_ascii_case("y") {
            let url = format!("http://{}:{}{}", args.host, args.port, path);
            if let Err(e) = client::open_in_browser(&url) {
                eprintln!("No se pudo abrir el navegador: {}", e);
            }
            return;
        }
    }
    println!("No se abrirá en el navegador.");
}

/// Abre una URL externa directo en el navegador, completando el esquema
fn open_external(input: &str) {
    let url = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    if let Err(e) = client::open_in_browser(&url) {
        eprintln!("No se pudo abrir el navegador: {}", e);
    }
}
