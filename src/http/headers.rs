//! # Headers HTTP
//! src/http/headers.rs
//!
//! Mapa de headers construido una sola vez por conexión a partir del texto
//! del header ya delimitado. El matching de nombres es exacto y sensible a
//! mayúsculas, gana la primera aparición de cada nombre y no hay folding
//! de líneas: es el mismo contrato mínimo que entienden los clientes de
//! este servidor.

use std::collections::HashMap;

/// Valor de Content-Length que no se pudo interpretar como entero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLength(pub String);

impl std::fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse Content-Length: {}", self.0)
    }
}

impl std::error::Error for InvalidLength {}

/// Mapa nombre -> valor de los headers de un request o una respuesta
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    entries: HashMap<String, String>,
}

impl HeaderMap {
    /// Construye el mapa desde el texto del header completo
    ///
    /// La primera línea (request line o status line) se salta. Cada línea
    /// restante se parte en el primer `:`; el nombre queda tal cual y al
    /// valor se le recortan espacios y tabs. Las líneas sin `:` se ignoran.
    /// Si un nombre se repite, se conserva el primer valor.
    pub fn parse(header_text: &str) -> Self {
        let mut entries = HashMap::new();

        for line in header_text.split("\r\n").skip(1) {
            if line.is_empty() {
                continue;
            }
            if let Some(colon) = line.find(':') {
                let name = line[..colon].to_string();
                let value = line[colon + 1..].trim().to_string();
                entries.entry(name).or_insert(value);
            }
        }

        Self { entries }
    }

    /// Valor de un header por nombre exacto
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|value| value.as_str())
    }

    /// Content-Length anunciado, si viene y es interpretable
    ///
    /// Ausente es `Ok(None)`; presente pero ilegible es `Err`, para que el
    /// caller decida su política (el handler de subidas lo registra y lo
    /// trata como 0).
    pub fn declared_length(&self) -> Result<Option<u64>, InvalidLength> {
        match self.get("Content-Length") {
            None => Ok(None),
            Some(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|_| InvalidLength(raw.to_string())),
        }
    }

    /// Nombre de archivo sugerido por el cliente vía X-Filename
    pub fn filename_hint(&self) -> Option<&str> {
        self.get("X-Filename").filter(|value| !value.is_empty())
    }

    /// Cantidad de headers distintos
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cierto si no se parseó ningún header
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_headers() {
        let raw = "POST /upload HTTP/1.0\r\nContent-Length: 5\r\nX-Filename: a.bin\r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Content-Length"), Some("5"));
        assert_eq!(headers.get("X-Filename"), Some("a.bin"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_request_line_is_not_a_header() {
        let raw = "GET /ruta HTTP/1.0\r\nHost: local\r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Host"), Some("local"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let raw = "POST /upload HTTP/1.0\r\nContent-Length: 5\r\nContent-Length: 99\r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Content-Length"), Some("5"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let raw = "POST /upload HTTP/1.0\r\ncontent-length: 5\r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Content-Length"), None);
        assert_eq!(headers.get("content-length"), Some("5"));
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let raw = "GET / HTTP/1.0\r\nesto no es un header\r\nHost: local\r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Host"), Some("local"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_value_whitespace_is_trimmed() {
        let raw = "POST /upload HTTP/1.0\r\nContent-Length:\t 42  \r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Content-Length"), Some("42"));
        assert_eq!(headers.declared_length(), Ok(Some(42)));
    }

    #[test]
    fn test_name_with_trailing_space_does_not_match() {
        // "Content-Length :" no es el header exacto "Content-Length"
        let raw = "POST /upload HTTP/1.0\r\nContent-Length : 5\r\n\r\n";
        let headers = HeaderMap::parse(raw);

        assert_eq!(headers.get("Content-Length"), None);
    }

    // ==================== Content-Length ====================

    #[test]
    fn test_declared_length_missing() {
        let headers = HeaderMap::parse("GET / HTTP/1.0\r\n\r\n");
        assert_eq!(headers.declared_length(), Ok(None));
    }

    #[test]
    fn test_declared_length_valid() {
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\nContent-Length: 1024\r\n\r\n");
        assert_eq!(headers.declared_length(), Ok(Some(1024)));
    }

    #[test]
    fn test_declared_length_garbled() {
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\nContent-Length: abc\r\n\r\n");
        assert_eq!(
            headers.declared_length(),
            Err(InvalidLength("abc".to_string()))
        );
    }

    #[test]
    fn test_declared_length_mixed_digits() {
        // "12abc" no es un entero completo, es un valor ilegible
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\nContent-Length: 12abc\r\n\r\n");
        assert!(headers.declared_length().is_err());
    }

    #[test]
    fn test_declared_length_negative() {
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\nContent-Length: -5\r\n\r\n");
        assert!(headers.declared_length().is_err());
    }

    // ==================== X-Filename ====================

    #[test]
    fn test_filename_hint_present() {
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\nX-Filename: informe.pdf\r\n\r\n");
        assert_eq!(headers.filename_hint(), Some("informe.pdf"));
    }

    #[test]
    fn test_filename_hint_empty_value() {
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\nX-Filename: \r\n\r\n");
        assert_eq!(headers.filename_hint(), None);
    }

    #[test]
    fn test_filename_hint_missing() {
        let headers = HeaderMap::parse("POST /upload HTTP/1.0\r\n\r\n");
        assert_eq!(headers.filename_hint(), None);
    }
}
