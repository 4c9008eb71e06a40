use std::{
    fmt::Display,
    io::{Error as IoError, ErrorKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    EmptyHeap(&'static str),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::EmptyHeap(op) => {
                write!(f, "cannot {} from an empty heap", op)
            }
        }
    }
}

impl std::error::Error for HeapError {}

pub fn as_io_error(error: HeapError) -> std::io::Error {
    IoError::new(ErrorKind::Other, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            HeapError::EmptyHeap("pop").to_string(),
            "cannot pop from an empty heap"
        );
        let e = as_io_error(HeapError::EmptyHeap("top"));
        assert_eq!(e.kind(), ErrorKind::Other);
        assert_eq!(e.to_string(), "cannot top from an empty heap");
    }
}
