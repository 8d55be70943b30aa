use serde::{Deserialize, Serialize};

/// Voice model variant requested from the provider.
///
/// Unknown values are kept verbatim so they reach the provider untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Engine {
    Standard,
    Neural,
    Other(String),
}

impl Engine {
    pub fn as_str(&self) -> &str {
        match self {
            Engine::Standard => "standard",
            Engine::Neural => "neural",
            Engine::Other(value) => value.as_str(),
        }
    }

    /// Neural voices reject pitch control
    pub fn supports_pitch(&self) -> bool {
        !matches!(self, Engine::Neural)
    }
}

impl From<String> for Engine {
    fn from(value: String) -> Self {
        match value.as_str() {
            "standard" => Engine::Standard,
            "neural" => Engine::Neural,
            _ => Engine::Other(value),
        }
    }
}

impl From<&str> for Engine {
    fn from(value: &str) -> Self {
        Engine::from(value.to_string())
    }
}

impl From<Engine> for String {
    fn from(engine: Engine) -> Self {
        engine.as_str().to_string()
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Invocation payload. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceRequest {
    pub pitch: f64,
    pub speaking_rate: f64,
    pub volume_gain_db: f64,
    pub voice_id: String,
    pub lang_code: String,
    pub engine: Engine,
    pub content: String,
    pub content_type: String,
}

/// Invocation result. At most one of `voice_url` / `task_id` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceResponse {
    #[serde(rename = "voiceUrl")]
    pub voice_url: String,
    // Field name is part of the published contract, misspelling included
    #[serde(rename = "requestChararacters")]
    pub request_characters: i32,
    #[serde(rename = "taskId")]
    pub task_id: String,
}
