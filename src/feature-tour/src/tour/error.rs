use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TourError {
    UnknownLesson(String),
    DuplicateLesson(String),
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::UnknownLesson(name) => write!(f, "Unknown lesson: {}", name),
            TourError::DuplicateLesson(name) => {
                write!(f, "Lesson '{}' is already registered", name)
            }
        }
    }
}

impl std::error::Error for TourError {}

pub type TourResult<T> = Result<T, TourError>;
