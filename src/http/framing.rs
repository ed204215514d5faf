//! # Framing del Header HTTP
//! src/http/framing.rs
//!
//! Lectura del header HTTP desde un stream TCP. El protocolo delimita el
//! header con la secuencia `\r\n\r\n`, pero un `read` del socket puede
//! devolver los bytes en pedazos arbitrarios o traer de más (bytes del body
//! que llegaron en el mismo paquete). Este módulo acumula lecturas hasta
//! encontrar el terminador y conserva el sobrante para que la etapa del
//! body no pierda ni relea bytes.
//!
//! ## Límite de tamaño
//!
//! Un cliente malicioso podría mandar un header interminable: si el buffer
//! acumulado supera `max_size` sin que aparezca el terminador, el framing
//! falla y la conexión se cierra sin respuesta.

use std::io::Read;

/// Tamaño de cada lectura del socket durante el framing
const RECV_CHUNK_SIZE: usize = 4096;

/// Límite por defecto para el header acumulado (64 KiB)
pub const DEFAULT_MAX_HEADER_SIZE: usize = 64 * 1024;

/// Secuencia que separa el header del body
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Errores terminales del framing: la conexión no sirve para responder
#[derive(Debug)]
pub enum FramingError {
    /// El socket falló o se cerró antes de completar el header
    ReadFailed(std::io::Error),

    /// El header acumulado superó el tamaño máximo permitido
    HeaderTooLarge(usize),
}

impl std::fmt::Display for FramingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FramingError::ReadFailed(e) => write!(f, "Socket read failed while framing header: {}", e),
            FramingError::HeaderTooLarge(size) => write!(f, "Request header too large ({} bytes)", size),
        }
    }
}

impl std::error::Error for FramingError {}

/// Header delimitado, junto con los bytes del body que llegaron de más
#[derive(Debug)]
pub struct FramedHeader {
    /// Todo lo leído del socket hasta encontrar el terminador
    bytes: Vec<u8>,

    /// Offset del primer byte después del terminador
    body_start: usize,
}

impl FramedHeader {
    /// Texto del header, terminador incluido
    ///
    /// Los bytes que no sean UTF-8 válido se reemplazan; el parser de la
    /// request line trabaja sobre este texto.
    pub fn header_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes[..self.body_start])
    }

    /// Bytes del body que llegaron pegados al header
    ///
    /// Se entregan tal cual al handler del body: nunca se descartan ni se
    /// vuelven a leer del socket.
    pub fn residue(&self) -> &[u8] {
        &self.bytes[self.body_start..]
    }
}

/// Acumula lecturas del stream hasta encontrar el terminador del header
///
/// El chequeo de tamaño corre después de buscar el terminador: una lectura
/// que completa el header y de paso excede `max_size` sigue siendo válida.
pub fn read_header(stream: &mut impl Read, max_size: usize) -> Result<FramedHeader, FramingError> {
    let mut buffer: Vec<u8> = Vec::with_capacity(2048);
    let mut chunk = [0u8; RECV_CHUNK_SIZE];

    loop {
        let received = stream.read(&mut chunk).map_err(FramingError::ReadFailed)?;
        if received == 0 {
            return Err(FramingError::ReadFailed(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "connection closed before end of header",
            )));
        }

        buffer.extend_from_slice(&chunk[..received]);

        if let Some(position) = find_terminator(&buffer) {
            return Ok(FramedHeader {
                bytes: buffer,
                body_start: position + HEADER_TERMINATOR.len(),
            });
        }

        if buffer.len() > max_size {
            return Err(FramingError::HeaderTooLarge(buffer.len()));
        }
    }
}

/// Posición de la primera aparición de `\r\n\r\n` en el buffer
fn find_terminator(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(HEADER_TERMINATOR.len())
        .position(|window| window == HEADER_TERMINATOR)
}
