pub mod assembler;
pub mod chunker;
pub mod dispatcher;
pub mod dto;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod service;
pub mod voice;

pub use chunker::Chunker;
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};
pub use voice::validate_voice;
