#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{structure} is empty")]
    Empty { structure: &'static str },

    #[error("index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("index {index} is already present in the queue")]
    DuplicateIndex { index: usize },

    #[error("index {index} is not present in the queue")]
    MissingIndex { index: usize },

    #[error("heap degree must be at least 2 (got {degree})")]
    InvalidDegree { degree: usize },

    #[error("element is not tracked by this union-find: {element}")]
    UnknownElement { element: String },
}

pub type Result<T> = std::result::Result<T, Error>;
