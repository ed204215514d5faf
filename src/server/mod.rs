//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Implementa el lado servidor del sistema:
//! 1. Acepta conexiones TCP y las despacha vía el supervisor (`tcp`)
//! 2. Corre el pipeline por conexión y mapea sus errores (`handler`)
//! 3. Sirve archivos estáticos con su tipo MIME (`static_files`, `mime`)
//! 4. Recibe subidas en streaming hacia disco (`upload`)

pub mod handler;
pub mod mime;
pub mod static_files;
pub mod supervisor;
pub mod tcp;
pub mod upload;

// Re-exportar para facilitar el uso
pub use handler::HandlerError;
pub use tcp::Server;
