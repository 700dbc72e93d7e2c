/// Domain failures that handlers turn into error pages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No `entity` is addressed by `key`. The key is kept as given, so a
    /// malformed identifier reads the same as one that matches no row.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
}
