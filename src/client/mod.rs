//! # Glue Compartido de los Clientes
//! src/client/mod.rs
//!
//! Lógica común de los binarios `get_client` y `post_client`: prompts
//! interactivos, lectura de la respuesta del servidor (reusando el framer
//! del header contra el stream de respuesta) y apertura de URLs en el
//! navegador por defecto del sistema.

use crate::http::framing::{self, FramingError};
use crate::http::headers::HeaderMap;
use std::io::{self, BufRead, Read, Write};
use std::process::Command;

/// Tamaño de cada lectura del body de la respuesta
const REPLY_CHUNK_SIZE: usize = 4096;

/// Límite para el header de una respuesta; espejo del límite del servidor
const REPLY_MAX_HEADER_SIZE: usize = 64 * 1024;

/// Respuesta HTTP completa recibida del servidor
#[derive(Debug)]
pub struct Reply {
    /// Status line cruda (ej: "HTTP/1.0 200 OK")
    pub status_line: String,

    /// Headers de la respuesta
    pub headers: HeaderMap,

    /// Body completo
    pub body: Vec<u8>,
}

impl Reply {
    /// Cierto si la status line anuncia un 200
    pub fn is_ok(&self) -> bool {
        self.status_line.contains(" 200 ")
    }

    /// Body como texto, con reemplazo de bytes inválidos
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Muestra un prompt y lee una línea de stdin
///
/// Retorna `None` cuando el usuario quiere salir: línea vacía, `quit` o
/// fin del stdin.
pub fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).ok()?;
    if read == 0 {
        return None;
    }

    let trimmed = line.trim().to_string();
    if trimmed.is_empty() || trimmed == "quit" {
        return None;
    }

    Some(trimmed)
}

/// Lee una respuesta HTTP completa del stream
///
/// Reusa el framer del servidor para delimitar el header y después honra
/// el Content-Length anunciado: el sobrante del framing cuenta primero y
/// el resto se lee del socket. Sin Content-Length (o ilegible) se lee
/// hasta EOF, que con conexiones HTTP/1.0 de un solo uso delimita igual.
pub fn read_reply(stream: &mut impl Read) -> io::Result<Reply> {
    let framed = framing::read_header(stream, REPLY_MAX_HEADER_SIZE).map_err(|e| match e {
        FramingError::ReadFailed(inner) => inner,
        FramingError::HeaderTooLarge(size) => io::Error::new(
            io::ErrorKind::InvalidData,
            format!("response header too large ({} bytes)", size),
        ),
    })?;

    let header_text = framed.header_text().into_owned();
    let status_line = header_text
        .split("\r\n")
        .next()
        .unwrap_or_default()
        .to_string();
    let headers = HeaderMap::parse(&header_text);

    let mut body = framed.residue().to_vec();

    match headers.declared_length() {
        Ok(Some(declared)) => {
            let declared = declared as usize;
            body.truncate(declared);

            let mut chunk = [0u8; REPLY_CHUNK_SIZE];
            while body.len() < declared {
                let pending = declared - body.len();
                let limit = REPLY_CHUNK_SIZE.min(pending);
                let received = stream.read(&mut chunk[..limit])?;
                if received == 0 {
                    // Servidor cortó antes de lo anunciado; se entrega lo
                    // que llegó
                    break;
                }
                body.extend_from_slice(&chunk[..received]);
            }
        }
        Ok(None) | Err(_) => {
            stream.read_to_end(&mut body)?;
        }
    }

    Ok(Reply {
        status_line,
        headers,
        body,
    })
}

/// Arma una request GET HTTP/1.0 lista para enviar
pub fn build_get_request(path: &str, host: &str) -> String {
    format!("GET {} HTTP/1.0\r\nHost: {}\r\n\r\n", path, host)
}

/// Arma el header de una subida POST /upload
pub fn build_upload_header(host: &str, filename: &str, length: u64) -> String {
    format!(
        "POST /upload HTTP/1.0\r\n\
         Host: {}\r\n\
         Content-Type: application/octet-stream\r\n\
         Content-Length: {}\r\n\
         X-Filename: {}\r\n\
         \r\n",
        host, length, filename
    )
}

/// Abre una URL en el navegador por defecto del sistema
pub fn open_in_browser(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    command.spawn().map(|_| ())
}
