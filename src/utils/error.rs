use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{class} class is not found in the system")]
    ClassNotFound { class: String },

    #[error("{name} not found in {class} class")]
    StudentNotFound { class: String, name: String },

    #[error("Invalid {field} input")]
    InvalidInput { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
