// Domain-level errors for scenario workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum RequestError {
    MissingField(&'static str),
}

// Failures while loading the scenario catalog.
#[derive(Debug)]
pub enum CatalogError {
    Read { path: String, reason: String },
    Parse { path: String, reason: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Read { path, reason } => {
                write!(f, "failed to read scenario catalog {path}: {reason}")
            }
            CatalogError::Parse { path, reason } => {
                write!(f, "failed to parse scenario catalog {path}: {reason}")
            }
        }
    }
}
