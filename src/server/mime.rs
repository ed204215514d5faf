//! # Tipos MIME
//! src/server/mime.rs
//!
//! Tabla fija de extensión a tipo MIME para el handler de archivos
//! estáticos. Lo que no esté en la tabla viaja como binario genérico.

/// Infiere el tipo MIME a partir de la extensión del archivo
///
/// La extensión se compara en minúsculas. Sin extensión, o con una
/// desconocida, se responde `application/octet-stream`.
///
/// # Ejemplo
/// ```
/// use file_server::server::mime::mime_type;
///
/// assert_eq!(mime_type("main/index.html"), "text/html");
/// assert_eq!(mime_type("video.MP4"), "video/mp4");
/// assert_eq!(mime_type("archivo.bin"), "application/octet-stream");
/// ```
pub fn mime_type(path: &str) -> &'static str {
    let dot = match path.rfind('.') {
        Some(position) => position,
        None => return "application/octet-stream",
    };

    let extension = path[dot + 1..].to_ascii_lowercase();
    match extension.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_type("index.html"), "text/html");
        assert_eq!(mime_type("pagina.htm"), "text/html");
        assert_eq!(mime_type("estilos.css"), "text/css");
        assert_eq!(mime_type("app.js"), "application/javascript");
        assert_eq!(mime_type("logo.png"), "image/png");
        assert_eq!(mime_type("foto.jpg"), "image/jpeg");
        assert_eq!(mime_type("foto.jpeg"), "image/jpeg");
        assert_eq!(mime_type("anim.gif"), "image/gif");
        assert_eq!(mime_type("favicon.ico"), "image/x-icon");
        assert_eq!(mime_type("dibujo.svg"), "image/svg+xml");
        assert_eq!(mime_type("video.mp4"), "video/mp4");
        assert_eq!(mime_type("video.webm"), "video/webm");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(mime_type("INDEX.HTML"), "text/html");
        assert_eq!(mime_type("foto.JPeG"), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(mime_type("archivo.xyz"), "application/octet-stream");
        assert_eq!(mime_type("paquete.tar.gz"), "application/octet-stream");
    }

    #[test]
    fn test_no_extension_is_octet_stream() {
        assert_eq!(mime_type("Makefile"), "application/octet-stream");
        assert_eq!(mime_type(""), "application/octet-stream");
    }

    #[test]
    fn test_last_dot_wins() {
        // El punto puede estar en un directorio; se toma el último
        assert_eq!(mime_type("carpeta.d/archivo"), "application/octet-stream");
        assert_eq!(mime_type("v1.2/index.html"), "text/html");
    }
}
