//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos con soporte
//! para argumentos CLI y variables de entorno. Se resuelve una sola vez al
//! arranque y después es de solo lectura: nada del servidor vuelve a tocar
//! puertos ni rutas sueltas.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./file_server --port 8080 \
//!   --host 0.0.0.0 \
//!   --upload-dir uploads \
//!   --max-header-size 65536
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=0.0.0.0 ./file_server
//! ```

use clap::Parser;

/// Configuración del servidor de archivos HTTP/1.0
#[derive(Debug, Clone, Parser)]
#[command(name = "file_server")]
#[command(about = "Servidor de archivos HTTP/1.0 concurrente con subidas")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Host que se publica en las URLs de subida (lo que ve el cliente)
    #[arg(long = "public-host", default_value = "127.0.0.1", env = "PUBLIC_HOST")]
    pub public_host: String,

    /// Directorio raíz de los archivos estáticos
    #[arg(long = "web-root", default_value = ".", env = "WEB_ROOT")]
    pub web_root: String,

    /// Directorio donde se guardan los archivos subidos
    #[arg(long = "upload-dir", default_value = "uploads", env = "UPLOAD_DIR")]
    pub upload_dir: String,

    /// Tamaño máximo del header acumulado antes de abortar, en bytes
    #[arg(long = "max-header-size", default_value = "65536", env = "MAX_HEADER_SIZE")]
    pub max_header_size: usize,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```no_run
    /// use file_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL base que se interpola en las respuestas de subida
    ///
    /// Usa el host público, no el de bind: escuchar en `0.0.0.0` no produce
    /// una URL navegable.
    ///
    /// # Ejemplo
    /// ```rust
    /// use file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    /// ```
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.public_host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.public_host.is_empty() {
            return Err("Public host must not be empty".to_string());
        }
        if self.web_root.is_empty() {
            return Err("Web root must not be empty".to_string());
        }
        if self.upload_dir.is_empty() {
            return Err("Upload directory must not be empty".to_string());
        }

        // Con menos que una request line no hay header parseable
        if self.max_header_size < 16 {
            return Err("Max header size must be >= 16 bytes".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║            File Server HTTP/1.0 Configuration                ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Bind address: {}", self.address());
        println!("   Public URL:   {}", self.base_url());
        println!();
        println!("📁 Filesystem:");
        println!("   Web root:     {}", self.web_root);
        println!("   Upload dir:   {}", self.upload_dir);
        println!();
        println!("📏 Limits:");
        println!("   Max header:   {} bytes", self.max_header_size);
        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            public_host: "127.0.0.1".to_string(),
            web_root: ".".to_string(),
            upload_dir: "uploads".to_string(),
            max_header_size: 64 * 1024,
        }
    }
}
