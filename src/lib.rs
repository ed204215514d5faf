//! # File Server
//! src/lib.rs
//!
//! Servidor de archivos HTTP/1.0 concurrente implementado desde cero sobre
//! sockets TCP crudos, junto con la lógica compartida de sus dos clientes
//! (descarga y subida).
//!
//! ## Arquitectura
//!
//! El crate está dividido en módulos especializados:
//! - `http`: framing, parsing y construcción del subconjunto HTTP/1.0
//! - `server`: acceptor TCP, pipeline por conexión, estáticos y subidas
//! - `config`: configuración resuelta una vez al arranque (CLI/env)
//! - `client`: glue compartido por los binarios `get_client` y `post_client`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use file_server::server::Server;
//! use file_server::config::Config;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod client;
pub mod config;
pub mod http;
pub mod server;
