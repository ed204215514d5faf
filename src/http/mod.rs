//! # Módulo HTTP
//!
//! Este módulo implementa el subconjunto de HTTP/1.0 que habla el
//! servidor, desde cero y sin librerías de alto nivel. Incluye:
//!
//! - Framing del header contra el stream TCP (terminador `\r\n\r\n`)
//! - Parsing de la request line y de los headers
//! - Construcción de responses HTTP
//! - Manejo de status codes
//!
//! ## Especificación HTTP/1.0
//!
//! El protocolo HTTP/1.0 (RFC 1945) es más simple que HTTP/1.1:
//! - No requiere el header `Host`
//! - No tiene chunked transfer encoding
//! - No mantiene conexiones persistentes
//!
//! ### Formato de Request
//!
//! ```text
//! POST /upload HTTP/1.0\r\n
//! Content-Length: 5\r\n
//! X-Filename: a.bin\r\n
//! \r\n
//! hello
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 45\r\n
//! \r\n
//! {"url":"http://127.0.0.1:8080/uploads/a.bin"}
//! ```

pub mod framing;   // Framing del header contra el socket
pub mod headers;   // Mapa de headers y Content-Length
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
