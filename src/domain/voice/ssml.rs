use super::dto::Engine;

/// Prosody settings applied to the whole utterance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prosody {
    /// Percent relative to the voice default
    pub pitch: f64,
    /// Percent of the normal speaking rate
    pub rate: f64,
    /// Decibels relative to the voice default
    pub volume: f64,
}

/// Wrap `text` in an SSML `<speak>` document carrying the prosody settings.
///
/// Pitch is left out for engines that reject it (neural voices), so the
/// markup stays valid for every engine instead of failing the request.
pub fn text_to_ssml(text: &str, engine: &Engine, prosody: Prosody) -> String {
    let text = escape_xml(text);

    if engine.supports_pitch() {
        format!(
            r#"<speak><prosody pitch="{}%" rate="{}%" volume="{}dB">{}</prosody></speak>"#,
            prosody.pitch, prosody.rate, prosody.volume, text
        )
    } else {
        format!(
            r#"<speak><prosody rate="{}%" volume="{}dB">{}</prosody></speak>"#,
            prosody.rate, prosody.volume, text
        )
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
