//! # Handler de Subidas
//! src/server/upload.rs
//!
//! Recibe el body de un POST /upload y lo escribe a disco en streaming:
//! primero el sobrante que llegó pegado al header y después lecturas del
//! socket hasta completar el Content-Length declarado. La respuesta es un
//! JSON con la URL pública del archivo guardado.
//!
//! El archivo destino se crea truncando cualquier versión anterior con el
//! mismo nombre. No hay verificación de integridad del contenido ni
//! saneamiento del nombre recibido.

use super::handler::HandlerError;
use crate::config::Config;
use crate::http::{Request, Response};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Tamaño de cada lectura del body
const BODY_CHUNK_SIZE: usize = 8192;

/// Nombre usado cuando el cliente no manda X-Filename
const DEFAULT_FILENAME: &str = "uploaded_file";

/// Atiende un POST /upload: streamea el body a disco y responde la URL
///
/// `residue` son los bytes del body que llegaron en la misma lectura que
/// el header; se escriben antes de volver a tocar el socket. Si el stream
/// se corta antes de los bytes declarados, la subida aborta sin respuesta
/// y el archivo parcial queda en disco.
pub fn handle_upload(
    stream: &mut impl Read,
    request: &Request,
    residue: &[u8],
    config: &Config,
) -> Result<Response, HandlerError> {
    let declared = declared_body_length(request)?;

    let filename = request
        .headers()
        .filename_hint()
        .unwrap_or(DEFAULT_FILENAME)
        .to_string();

    // El directorio puede no existir todavía (o haber sido borrado en
    // caliente); se crea antes de cada subida
    fs::create_dir_all(&config.upload_dir)
        .map_err(|e| HandlerError::FileUnavailable(e.to_string()))?;

    let disk_path = Path::new(&config.upload_dir).join(&filename);
    let mut file = File::create(&disk_path)
        .map_err(|e| HandlerError::FileUnavailable(e.to_string()))?;

    let mut written: u64 = 0;

    // Primero el body que ya llegó junto al header
    if !residue.is_empty() {
        let take = (residue.len() as u64).min(declared) as usize;
        file.write_all(&residue[..take])
            .map_err(HandlerError::TransferFailed)?;
        written += take as u64;
    }

    // Después el resto del socket, en lecturas acotadas a lo que falta
    let mut chunk = [0u8; BODY_CHUNK_SIZE];
    while written < declared {
        let pending = declared - written;
        let limit = (BODY_CHUNK_SIZE as u64).min(pending) as usize;

        let received = stream
            .read(&mut chunk[..limit])
            .map_err(HandlerError::TransferFailed)?;
        if received == 0 {
            return Err(HandlerError::IncompleteBody {
                received: written,
                declared,
            });
        }

        file.write_all(&chunk[..received])
            .map_err(HandlerError::TransferFailed)?;
        written += received as u64;
    }

    println!(
        "   📦 {} / {} bytes escritos en {}",
        written,
        declared,
        disk_path.display()
    );

    Ok(Response::json(&upload_reply(config, &filename)))
}

/// Content-Length efectivo de la subida
///
/// Ausente o ilegible valen 0, y 0 no es una subida válida: sin un largo
/// positivo no hay forma de saber cuándo termina el body.
fn declared_body_length(request: &Request) -> Result<u64, HandlerError> {
    let declared = match request.headers().declared_length() {
        Ok(value) => value.unwrap_or(0),
        Err(e) => {
            eprintln!("   ⚠️  {}", e);
            0
        }
    };

    if declared == 0 {
        let raw = request
            .headers()
            .get("Content-Length")
            .unwrap_or("(missing)")
            .to_string();
        return Err(HandlerError::InvalidContentLength(raw));
    }

    Ok(declared)
}

/// Body JSON de la respuesta: la URL pública del archivo subido
///
/// El nombre se interpola tal cual, sin escape alguno.
fn upload_reply(config: &Config, filename: &str) -> String {
    format!(
        r#"{{"url":"{}/{}/{}"}}"#,
        config.base_url(),
        config.upload_dir,
        filename
    )
}
