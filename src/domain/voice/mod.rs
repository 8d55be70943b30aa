pub mod dto;
pub mod error;
pub mod service;
pub mod ssml;

pub use dto::{Engine, VoiceRequest, VoiceResponse};
pub use error::VoiceServiceError;
pub use service::{SynthesisResult, VoiceOutcome, VoiceService, VoiceServiceApi, MAX_INLINE_CHARACTERS};
pub use ssml::{text_to_ssml, Prosody};
