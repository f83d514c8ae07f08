//! Dispatcher configuration.

/// Everything a dispatcher needs to know about its target.
///
/// Passed explicitly at construction; dispatchers never read ambient state.
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    /// Ingestion endpoint, e.g. `http://localhost:8083/ingest/demo`
    pub endpoint: String,
    /// Sent verbatim as the `Authorization` header when set
    pub auth_token: Option<String>,
    /// Additional static headers
    pub extra_headers: Vec<(String, String)>,
    /// Read and log response bodies
    pub capture_body: bool,
}

impl DispatchConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    pub fn with_capture_body(mut self, capture_body: bool) -> Self {
        self.capture_body = capture_body;
        self
    }
}

/// Parse a `Name: value` header argument.
pub fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid header '{s}': expected 'Name: value'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid header '{s}': empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
