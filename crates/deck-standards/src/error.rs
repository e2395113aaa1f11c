#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("unknown stat `{id}`")]
    UnknownStat { id: String },
}
