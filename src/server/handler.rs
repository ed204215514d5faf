//! # Pipeline por Conexión
//! src/server/handler.rs
//!
//! Cada conexión aceptada corre este pipeline completo en su propio thread:
//! framing del header, parsing de la request line y despacho por método.
//! El socket es propiedad exclusiva del handler y se cierra (drop) en todo
//! camino de salida, con o sin respuesta.
//!
//! ## Política de respuestas
//!
//! No todo error merece una respuesta. Si el framing falló o el body quedó
//! a medias, el estado del socket ya no es confiable y la conexión se
//! cierra en silencio. Solo los errores de aplicación con una conexión
//! todavía sana (request inentendible, archivo destino impreparable)
//! reciben un 404 o 500 explícito antes del cierre.

use super::{static_files, upload};
use crate::config::Config;
use crate::http::framing::{self, FramingError};
use crate::http::request::{Method, ParseError};
use crate::http::{Request, Response, StatusCode};
use std::io::Write;
use std::net::TcpStream;

/// Destino único que acepta el handler de subidas
const UPLOAD_TARGET: &str = "/upload";

/// Taxonomía de fallas de un handler
///
/// Las primeras cinco cierran la conexión sin responder; `Malformed`,
/// `Unsupported` y `FileUnavailable` tienen una respuesta asociada vía
/// [`HandlerError::response`].
#[derive(Debug)]
pub enum HandlerError {
    /// El socket falló o se cerró antes de completar el header
    ReadFailed(std::io::Error),

    /// El header acumulado superó el tamaño máximo configurado
    HeaderTooLarge(usize),

    /// Request line sin espacio de cierre después del destino
    Malformed,

    /// El header no empieza con "GET " ni "POST "
    Unsupported(String),

    /// Content-Length de subida ausente, cero o ilegible
    InvalidContentLength(String),

    /// El cliente cerró antes de mandar los bytes declarados
    IncompleteBody { received: u64, declared: u64 },

    /// Falla de I/O a mitad de la transferencia del body
    TransferFailed(std::io::Error),

    /// No se pudo preparar el archivo o directorio destino
    FileUnavailable(String),
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::ReadFailed(e) => write!(f, "Read failed while framing header: {}", e),
            HandlerError::HeaderTooLarge(size) => {
                write!(f, "Request header too large ({} bytes)", size)
            }
            HandlerError::Malformed => write!(f, "Malformed request line"),
            HandlerError::Unsupported(method) => {
                write!(f, "Unsupported HTTP method: {}", method)
            }
            HandlerError::InvalidContentLength(raw) => {
                write!(f, "Invalid Content-Length for upload: {}", raw)
            }
            HandlerError::IncompleteBody { received, declared } => write!(
                f,
                "Client closed after {} of {} declared body bytes",
                received, declared
            ),
            HandlerError::TransferFailed(e) => write!(f, "Body transfer failed: {}", e),
            HandlerError::FileUnavailable(detail) => {
                write!(f, "Could not prepare destination file: {}", detail)
            }
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<FramingError> for HandlerError {
    fn from(error: FramingError) -> Self {
        match error {
            FramingError::ReadFailed(e) => HandlerError::ReadFailed(e),
            FramingError::HeaderTooLarge(size) => HandlerError::HeaderTooLarge(size),
        }
    }
}

impl HandlerError {
    /// Respuesta que corresponde enviar antes de cerrar, si alguna
    ///
    /// `None` significa cierre silencioso: el socket ya no sirve para
    /// responder o el protocolo quedó a mitad de un body.
    pub fn response(&self) -> Option<Response> {
        match self {
            HandlerError::Malformed | HandlerError::Unsupported(_) => {
                Some(Response::empty(StatusCode::NotFound))
            }
            HandlerError::FileUnavailable(_) => {
                Some(Response::empty(StatusCode::InternalServerError))
            }
            HandlerError::ReadFailed(_)
            | HandlerError::HeaderTooLarge(_)
            | HandlerError::InvalidContentLength(_)
            | HandlerError::IncompleteBody { .. }
            | HandlerError::TransferFailed(_) => None,
        }
    }
}

/// Corre el pipeline completo sobre una conexión aceptada
///
/// El `TcpStream` se consume: al retornar, por éxito o por error, el drop
/// cierra el socket. El `Err` se propaga igual aunque se haya enviado una
/// respuesta, para que el supervisor lo registre.
pub fn handle_connection(mut stream: TcpStream, config: &Config) -> Result<(), HandlerError> {
    match run_pipeline(&mut stream, config) {
        Ok(response) => send_response(&mut stream, &response),
        Err(error) => {
            if let Some(response) = error.response() {
                // El cierre inminente manda: si esta escritura falla ya no
                // hay nada que reportar por este socket
                let _ = send_response(&mut stream, &response);
            }
            Err(error)
        }
    }
}

/// Framing, parsing y despacho; produce la respuesta a enviar
fn run_pipeline(stream: &mut TcpStream, config: &Config) -> Result<Response, HandlerError> {
    let framed = framing::read_header(stream, config.max_header_size)?;

    let request = match Request::parse(&framed.header_text()) {
        Ok(request) => request,
        Err(ParseError::Malformed) => return Err(HandlerError::Malformed),
        Err(ParseError::UnsupportedMethod(method)) => {
            return Err(HandlerError::Unsupported(method))
        }
    };

    match request.method() {
        Method::GET => Ok(static_files::handle_get(request.target(), &config.web_root)),
        Method::POST => {
            if request.target() != UPLOAD_TARGET {
                println!("   ❌ POST {} -> destino desconocido", request.target());
                return Ok(Response::empty(StatusCode::NotFound));
            }
            upload::handle_upload(stream, &request, framed.residue(), config)
        }
    }
}

/// Serializa y envía una respuesta por el socket
fn send_response(stream: &mut TcpStream, response: &Response) -> Result<(), HandlerError> {
    stream
        .write_all(&response.to_bytes())
        .and_then(|_| stream.flush())
        .map_err(HandlerError::TransferFailed)
}
