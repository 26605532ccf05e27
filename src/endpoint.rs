/// Builds full route paths for the extension's endpoints from a configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    prefix: String,
}

impl Endpoints {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Joins the prefix and `name` with a single `/`; the result always starts with `/`.
    pub fn path(&self, name: &str) -> String {
        let prefix = self.prefix.trim_matches('/');
        let name = name.trim_start_matches('/');

        if prefix.is_empty() {
            format!("/{name}")
        } else {
            format!("/{prefix}/{name}")
        }
    }

    /// [`Endpoints::path`] as an axum route pattern, with braces escaped so
    /// the prefix can never introduce a capture.
    pub fn route(&self, name: &str) -> String {
        self.path(name).replace('{', "{{").replace('}', "}}")
    }
}
