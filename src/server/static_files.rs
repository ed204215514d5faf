//! # Handler de Archivos Estáticos
//! src/server/static_files.rs
//!
//! Atiende los GET: normaliza el destino, lee el archivo completo a
//! memoria y responde 200 con su tipo MIME y el Content-Length exacto.
//! Un archivo que no se puede abrir responde 404 con body vacío, sin
//! distinguir la causa.

use super::mime;
use crate::http::{Response, StatusCode};
use std::fs;
use std::path::Path;

/// Página que sirven la raíz y sus alias
const DEFAULT_PAGE: &str = "/main/index.html";

/// Atiende un GET y produce la respuesta correspondiente
///
/// La lectura es de una sola pasada y el archivo entero queda en memoria;
/// no hay caché ni soporte de rangos.
pub fn handle_get(target: &str, web_root: &str) -> Response {
    let relative = normalize_target(target);
    let disk_path = Path::new(web_root).join(relative);

    match fs::read(&disk_path) {
        Ok(contents) => {
            println!("   📄 GET {} ({} bytes)", target, contents.len());
            Response::new(StatusCode::Ok)
                .with_header("Content-Type", mime::mime_type(relative))
                .with_body_bytes(contents)
        }
        Err(_) => {
            println!("   ❌ GET {} -> recurso no disponible", target);
            Response::empty(StatusCode::NotFound)
        }
    }
}

/// Normaliza el destino de un GET a una ruta relativa al web root
///
/// `/`, `/main` y `/main/` son alias de la página principal; el `/`
/// inicial se quita para resolver contra el directorio del servidor.
fn normalize_target(target: &str) -> &str {
    let aliased = match target {
        "/" | "/main" | "/main/" => DEFAULT_PAGE,
        other => other,
    };
    aliased.strip_prefix('/').unwrap_or(aliased)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_web_root(tag: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("file_server_static_{}_{}", tag, std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    // ==================== Normalización ====================

    #[test]
    fn test_root_aliases_resolve_to_default_page() {
        assert_eq!(normalize_target("/"), "main/index.html");
        assert_eq!(normalize_target("/main"), "main/index.html");
        assert_eq!(normalize_target("/main/"), "main/index.html");
    }

    #[test]
    fn test_leading_slash_is_stripped() {
        assert_eq!(normalize_target("/css/estilos.css"), "css/estilos.css");
    }

    #[test]
    fn test_target_without_slash_is_kept() {
        assert_eq!(normalize_target("imagen.png"), "imagen.png");
    }

    #[test]
    fn test_similar_prefixes_are_not_aliased() {
        assert_eq!(normalize_target("/main/otra.html"), "main/otra.html");
        assert_eq!(normalize_target("/mainx"), "mainx");
    }

    // ==================== Respuestas ====================

    #[test]
    fn test_serves_existing_file_with_mime() {
        let root = temp_web_root("sirve");
        fs::write(root.join("pagina.html"), "<h1>Hola</h1>").unwrap();

        let response = handle_get("/pagina.html", &root.display().to_string());

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"<h1>Hola</h1>");
        assert_eq!(
            response.headers().get("Content-Type"),
            Some(&"text/html".to_string())
        );
        assert_eq!(
            response.headers().get("Content-Length"),
            Some(&"13".to_string())
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_default_page_served_for_root() {
        let root = temp_web_root("raiz");
        fs::create_dir_all(root.join("main")).unwrap();
        fs::write(root.join("main/index.html"), "<html>principal</html>").unwrap();

        let response = handle_get("/", &root.display().to_string());

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"<html>principal</html>");

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_missing_file_is_404_with_empty_body() {
        let root = temp_web_root("falta");

        let response = handle_get("/no_existe.txt", &root.display().to_string());

        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(response.body().is_empty());
        assert_eq!(
            response.headers().get("Content-Length"),
            Some(&"0".to_string())
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_binary_file_served_byte_exact() {
        let root = temp_web_root("binario");
        let datos = vec![0u8, 159, 146, 150, 255];
        fs::write(root.join("datos.bin"), &datos).unwrap();

        let response = handle_get("/datos.bin", &root.display().to_string());

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), &datos[..]);
        assert_eq!(
            response.headers().get("Content-Type"),
            Some(&"application/octet-stream".to_string())
        );

        let _ = fs::remove_dir_all(&root);
    }
}
