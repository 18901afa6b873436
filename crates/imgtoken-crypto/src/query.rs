use crate::tokens::sign_path;

/// Immutable request path a token is computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    full_path: String,
}

impl Query {
    #[must_use]
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
        }
    }

    /// Canonical signing path for a resize request.
    #[must_use]
    pub fn for_resize(width: u32, height: u32) -> Self {
        Self {
            full_path: format!("/?width={width}&height={height}"),
        }
    }

    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    #[must_use]
    pub fn token(&self, secret: &str) -> String {
        sign_path(&self.full_path, secret)
    }
}
