//! # Parsing de Requests HTTP/1.0
//! src/http/request.rs
//!
//! Parser de la request line del servidor: el método se decide por el
//! prefijo exacto del header (`"GET "` o `"POST "`, sensible a mayúsculas)
//! y el destino es el token hasta el siguiente espacio. Cualquier otro
//! comienzo es un método no soportado.
//!
//! ## Formato esperado
//!
//! ```text
//! GET /main/index.html HTTP/1.0\r\n
//! Host: 127.0.0.1\r\n
//! \r\n
//! ```

use super::headers::HeaderMap;

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Subir datos a un recurso
    POST,
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

/// Representa un request HTTP/1.0 parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET o POST)
    method: Method,

    /// Destino de la petición (ej: "/main/index.html" o "/upload")
    target: String,

    /// Headers del request
    headers: HeaderMap,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// La request line no tiene espacio después del destino
    Malformed,

    /// El header no empieza con un método soportado
    UnsupportedMethod(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Malformed => write!(f, "Malformed request line"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request desde el texto del header ya delimitado
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use file_server::http::Request;
    ///
    /// let raw = "GET /main/index.html HTTP/1.0\r\nHost: 127.0.0.1\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/main/index.html");
    /// assert_eq!(request.header("Host"), Some("127.0.0.1"));
    /// ```
    pub fn parse(header_text: &str) -> Result<Self, ParseError> {
        let (method, after_method) = if let Some(rest) = header_text.strip_prefix("GET ") {
            (Method::GET, rest)
        } else if let Some(rest) = header_text.strip_prefix("POST ") {
            (Method::POST, rest)
        } else {
            let first_token = header_text
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_string();
            return Err(ParseError::UnsupportedMethod(first_token));
        };

        // El destino termina en el siguiente espacio; sin espacio de cierre
        // la línea está malformada
        let space = after_method.find(' ').ok_or(ParseError::Malformed)?;
        let target = after_method[..space].to_string();

        let headers = HeaderMap::parse(header_text);

        Ok(Request {
            method,
            target,
            headers,
        })
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el destino del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}
