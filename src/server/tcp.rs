//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acceptor del servidor: escucha en el puerto configurado y despacha cada
//! conexión aceptada a un thread de handler vía el supervisor. El loop solo
//! bloquea en accept; nunca espera a que un handler termine. No hay límite
//! de conexiones ni apagado ordenado: el proceso corre hasta que lo maten.

use super::handler;
use super::supervisor::HandlerSupervisor;
use crate::config::Config;
use std::fs;
use std::net::TcpListener;

/// Servidor de archivos HTTP/1.0 concurrente
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Bindea el puerto configurado y atiende conexiones para siempre
    ///
    /// El directorio de subidas se crea al arranque; el handler de subidas
    /// lo vuelve a asegurar antes de cada archivo por si lo borran en
    /// caliente.
    pub fn run(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config.upload_dir)?;

        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexion\n");

        self.serve(listener)
    }

    /// Loop de accept sobre un listener ya bindeado
    ///
    /// Separado de `run` para que los tests puedan pasar un listener en
    /// puerto efímero. Los errores de accept se registran y el loop sigue.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        let mut supervisor = HandlerSupervisor::new();

        for stream in listener.incoming() {
            supervisor.reap_finished();

            match stream {
                Ok(stream) => {
                    let peer = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!(" ✅ Nueva conexión desde: {} (spawning thread)", peer);

                    let config = self.config.clone();
                    supervisor.spawn(peer, move || handler::handle_connection(stream, &config));
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    fn temp_config(tag: &str) -> (Config, PathBuf) {
        let mut base = std::env::temp_dir();
        base.push(format!("file_server_tcp_{}_{}", tag, std::process::id()));
        fs::create_dir_all(&base).expect("create temp dir");

        let mut config = Config::default();
        config.web_root = base.display().to_string();
        config.upload_dir = base.join("uploads").display().to_string();
        (config, base)
    }

    /// Levanta el acceptor en background sobre un puerto efímero
    fn spawn_server(config: Config) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let server = Server::new(config);
            let _ = server.serve(listener);
        });

        address
    }

    fn send_and_receive(address: std::net::SocketAddr, request: &[u8]) -> Vec<u8> {
        let mut client = TcpStream::connect(address).unwrap();
        client
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        client.write_all(request).unwrap();
        client.shutdown(std::net::Shutdown::Write).unwrap();

        let mut reply = Vec::new();
        client.read_to_end(&mut reply).unwrap();
        reply
    }

    #[test]
    fn test_serves_file_over_real_socket() {
        let (config, base) = temp_config("sirve");
        fs::write(base.join("pagina.html"), "<h1>hola</h1>").unwrap();

        let address = spawn_server(config);
        let reply = send_and_receive(address, b"GET /pagina.html HTTP/1.0\r\n\r\n");
        let text = String::from_utf8_lossy(&reply);

        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.ends_with("<h1>hola</h1>"));

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_acceptor_survives_a_bad_connection() {
        let (config, base) = temp_config("sobrevive");
        fs::write(base.join("ok.txt"), "sigo vivo").unwrap();

        let address = spawn_server(config);

        // Primera conexión: cliente corta el header a la mitad
        let reply = send_and_receive(address, b"GET /incompleto");
        assert!(reply.is_empty());

        // Segunda conexión: el acceptor sigue atendiendo
        let reply = send_and_receive(address, b"GET /ok.txt HTTP/1.0\r\n\r\n");
        let text = String::from_utf8_lossy(&reply);
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_concurrent_connections_are_independent() {
        let (config, base) = temp_config("paralelo");
        fs::write(base.join("a.txt"), "contenido A").unwrap();
        fs::write(base.join("b.txt"), "contenido B").unwrap();

        let address = spawn_server(config);

        let mut threads = Vec::new();
        for _ in 0..4 {
            threads.push(thread::spawn(move || {
                let reply_a = send_and_receive(address, b"GET /a.txt HTTP/1.0\r\n\r\n");
                let reply_b = send_and_receive(address, b"GET /b.txt HTTP/1.0\r\n\r\n");
                (reply_a, reply_b)
            }));
        }

        for t in threads {
            let (reply_a, reply_b) = t.join().unwrap();
            assert!(String::from_utf8_lossy(&reply_a).ends_with("contenido A"));
            assert!(String::from_utf8_lossy(&reply_b).ends_with("contenido B"));
        }

        let _ = fs::remove_dir_all(&base);
    }
}
