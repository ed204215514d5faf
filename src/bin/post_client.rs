//! # Cliente de Subida Interactivo
//! src/bin/post_client.rs
//!
//! Pide la ruta de un archivo en un loop, lo sube al servidor en chunks con
//! una barra de progreso, parsea el JSON de respuesta y abre la URL del
//! archivo subido en el navegador.

use clap::Parser;
use file_server::client;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::path::Path;

/// Tamaño de cada chunk de subida
const UPLOAD_CHUNK_SIZE: usize = 8192;

/// Ancho de la barra de progreso en caracteres
const PROGRESS_BAR_UNITS: usize = 50;

/// Nombre que se anuncia cuando la ruta no tiene componente final
const FALLBACK_FILENAME: &str = "uploaded_file";

/// Cliente interactivo de subida del servidor de archivos
#[derive(Debug, Parser)]
#[command(name = "post_client")]
#[command(about = "Cliente de subida interactivo del servidor de archivos")]
#[command(version = "0.1.0")]
struct Args {
    /// Host del servidor
    #[arg(long, default_value = "127.0.0.1", env = "SERVER_HOST")]
    host: String,

    /// Puerto del servidor
    #[arg(short, long, default_value = "8080", env = "SERVER_PORT")]
    port: u16,
}

/// Body JSON que devuelve el servidor tras una subida exitosa
#[derive(Debug, Deserialize)]
struct UploadReply {
    url: String,
}

fn main() {
    let args = Args::parse();

    loop {
        let path = match client::prompt(
            "Ruta del archivo a subir (Enter o 'quit' para salir): ",
        ) {
            Some(path) => path,
            None => {
                println!("Saliendo...");
                break;
            }
        };

        if let Err(e) = upload_file(&args, &path) {
            eprintln!("{}", e);
        }
    }
}

/// Sube un archivo completo y abre la URL resultante
fn upload_file(args: &Args, path: &str) -> Result<(), String> {
    let mut file =
        File::open(path).map_err(|e| format!("No se pudo abrir el archivo: {}", e))?;
    let total_bytes = file
        .metadata()
        .map_err(|e| format!("No se pudo leer el tamaño del archivo: {}", e))?
        .len();

    println!("Tamaño del archivo a subir: {} bytes.", total_bytes);

    let filename = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_FILENAME);

    let address = format!("{}:{}", args.host, args.port);
    let mut stream = TcpStream::connect(&address)
        .map_err(|e| format!("No se pudo conectar a {}: {}", address, e))?;

    let header = client::build_upload_header(&args.host, filename, total_bytes);
    stream
        .write_all(header.as_bytes())
        .map_err(|e| format!("No se pudo enviar el header: {}", e))?;

    send_body(&mut file, &mut stream, total_bytes)
        .map_err(|e| format!("\nFalló el envío del archivo: {}", e))?;
    println!();
    println!("Subida terminada, {} bytes enviados.", total_bytes);

    let reply = client::read_reply(&mut stream)
        .map_err(|e| format!("No llegó respuesta del servidor: {}", e))?;

    println!("Respuesta: {}", reply.status_line);
    println!("{}", reply.body_text());

    if !reply.is_ok() {
        return Err("El servidor no aceptó la subida.".to_string());
    }

    let parsed: UploadReply = serde_json::from_slice(&reply.body)
        .map_err(|e| format!("No se encontró una URL en la respuesta: {}", e))?;

    println!("Abriendo el navegador en: {}", parsed.url);
    client::open_in_browser(&parsed.url)
        .map_err(|e| format!("No se pudo abrir el navegador: {}", e))?;

    Ok(())
}

/// Envía el contenido del archivo en chunks, dibujando el progreso
fn send_body(file: &mut File, stream: &mut TcpStream, total_bytes: u64) -> io::Result<()> {
    let mut chunk = [0u8; UPLOAD_CHUNK_SIZE];
    let mut sent: u64 = 0;

    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }

        stream.write_all(&chunk[..read])?;
        sent += read as u64;
        draw_progress(sent, total_bytes);
    }

    stream.flush()
}

/// Barra de progreso de una línea, redibujada sobre sí misma
fn draw_progress(sent: u64, total_bytes: u64) {
    let progress = if total_bytes == 0 {
        100.0
    } else {
        sent as f64 * 100.0 / total_bytes as f64
    };
    let filled = (progress / 100.0 * PROGRESS_BAR_UNITS as f64) as usize;

    print!("\rSubiendo [");
    for i in 0..PROGRESS_BAR_UNITS {
        if i < filled {
            print!("=");
        } else if i == filled {
            print!(">");
        } else {
            print!(" ");
        }
    }
    print!(
        "] {}% ({}/{} bytes)",
        progress as u64, sent, total_bytes
    );
    let _ = io::stdout().flush();
}
