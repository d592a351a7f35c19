use thiserror::Error;

#[derive(Error, Debug)]
pub enum GffError {
    #[error("Expected 9 tab-separated columns in feature line: {0}")]
    MalformedFeatureLine(String),

    #[error("Can't parse coordinate `{coordinate}` in feature line: {line}")]
    InvalidCoordinate { coordinate: String, line: String },

    #[error("Feature start {start} is greater than end {end} in line: {line}")]
    ReversedCoordinates { start: u64, end: u64, line: String },

    #[error("Malformed attribute pair `{pair}` in attribute string `{attributes}`")]
    MalformedAttribute { pair: String, attributes: String },

    #[error("Parent `{0}` does not match the ID of any feature")]
    UnresolvedParentReference(String),

    #[error("No scaffold named `{0}` in this document")]
    MissingScaffold(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
