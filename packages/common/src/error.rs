use thiserror::Error;

/// Document-level failure. Any one of these aborts a run.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: expected an object at the document root")]
    NotAnObject { path: String },
}
