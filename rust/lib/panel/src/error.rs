use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("project has no file path yet; save the project before exporting panels")]
    NoProjectPath,

    #[error("object '{name}' overlaps another selected object")]
    OverlappingSelection { name: String },

    #[error("object '{0}' was skipped: it is not a tracked panel")]
    UnrecognizedObject(String),

    #[error("I/O error: {0}")]
    Io(String),
}
