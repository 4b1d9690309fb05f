//! Site assistant backed by the Gemini `generateContent` REST API.
//!
//! Chat never fails from the caller's point of view: a missing key, a
//! transport error or an empty reply each map to a fixed message. Speech
//! returns `None` on any failure.

use super::{AudioBuffer, IntegrationError};
use crate::catalog::Catalog;
use crate::config::{AssistantSection, SiteConfig, SiteSection};
use crate::log;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const SPEECH_PROMPT: &str = "Read this professionally and enthusiastically: ";

pub struct Assistant<'a> {
    config: &'a AssistantSection,
    site: &'a SiteSection,
    api_key: Option<String>,
    client: reqwest::Client,
    system: Content,
    /// Conversation so far, alternating user and model turns.
    history: Vec<Content>,
}

impl<'a> Assistant<'a> {
    /// Assistant using the key from the configured environment variable.
    pub fn new(config: &'a SiteConfig, catalog: &Catalog) -> Self {
        Self {
            config: &config.assistant,
            site: &config.site,
            api_key: config.assistant.api_key(),
            client: reqwest::Client::new(),
            system: Content::system(system_instruction(&config.site, catalog)),
            history: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Completed turns, user and model.
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Send one user message and return the reply text.
    pub async fn send_message(&mut self, text: &str) -> String {
        let Some(key) = self.api_key.clone() else {
            return format!(
                "I'm currently offline (API Key missing). Please call our office at {}.",
                self.site.display_phone
            );
        };

        match self.chat(&key, text).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => "I didn't catch that. Could you rephrase?".to_owned(),
            Err(err) => {
                log!("assistant"; "chat failed: {err}");
                "I'm having trouble connecting to the server. Please try again in a moment."
                    .to_owned()
            }
        }
    }

    /// Synthesize `text` with the configured voice.
    pub async fn generate_speech(&self, text: &str) -> Option<AudioBuffer> {
        let key = self.api_key.as_deref()?;
        match self.speech(key, text).await {
            Ok(audio) => Some(audio),
            Err(err) => {
                log!("assistant"; "speech failed: {err}");
                None
            }
        }
    }

    async fn chat(&mut self, key: &str, text: &str) -> Result<String, IntegrationError> {
        self.history.push(Content::user(text));

        let response = {
            let request = GenerateRequest {
                system_instruction: Some(&self.system),
                contents: &self.history,
                generation_config: None,
            };
            self.generate(key, &self.config.model, &request).await
        };
        let reply = match response {
            Ok(response) => response.text(),
            Err(err) => {
                self.history.pop();
                return Err(err);
            }
        };

        if reply.trim().is_empty() {
            self.history.pop();
        } else {
            self.history.push(Content::model(&reply));
        }
        Ok(reply)
    }

    async fn speech(&self, key: &str, text: &str) -> Result<AudioBuffer, IntegrationError> {
        let contents = [Content::user(&format!("{SPEECH_PROMPT}{text}"))];
        let request = GenerateRequest {
            system_instruction: None,
            contents: &contents,
            generation_config: Some(GenerationConfig::speech(&self.config.voice)),
        };
        let response = self.generate(key, &self.config.speech_model, &request).await?;
        let data = response.audio_data().ok_or(IntegrationError::EmptyResponse("audio"))?;
        AudioBuffer::decode_base64(data, self.config.sample_rate, 1)
    }

    async fn generate(
        &self,
        key: &str,
        model: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse, IntegrationError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        );
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(IntegrationError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

/// Persona and knowledge base sent with every chat request.
fn system_instruction(site: &SiteSection, catalog: &Catalog) -> String {
    let mut out = format!(
        "You are the AI Assistant for '{}', a premier roofing company in {}, {}.\n\
         Be helpful, professional and knowledgeable. Answer from the knowledge base below.\n\n\
         COMPANY: {}\nLOCATION: {}, {}, {} {}\nPHONE: {}\nWEBSITE: {}\n\nSERVICES:\n",
        site.name,
        site.city,
        site.region,
        site.name,
        site.address.street,
        site.city,
        site.region,
        site.address.postal_code,
        site.display_phone,
        site.url,
    );
    for service in catalog.services() {
        writeln!(out, "- {} ({}): {}", service.title, service.category, service.description).ok();
    }

    out.push_str("\nSERVICE AREAS: ");
    let areas: Vec<&str> = catalog.areas().iter().map(|area| area.name.as_str()).collect();
    out.push_str(&areas.join(", "));

    out.push_str("\n\nFREQUENT QUESTIONS:\n");
    for faq in catalog.faqs() {
        writeln!(out, "Q: {}\nA: {}", faq.question, faq.answer).ok();
    }

    out.push_str(
        "\nTone: professional, friendly, trustworthy, concise.\n\
         Do not invent services we don't offer.\n\
         If asked for a quote, suggest booking a free inspection.\n\
         Keep answers under 60 words unless a detailed explanation is needed.",
    );
    out
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'r> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<&'r Content>,
    contents: &'r [Content],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn system(text: String) -> Self {
        Self { role: None, parts: vec![Part::text(text)] }
    }

    fn user(text: &str) -> Self {
        Self { role: Some("user".into()), parts: vec![Part::text(text.to_owned())] }
    }

    fn model(text: &str) -> Self {
        Self { role: Some("model".into()), parts: vec![Part::text(text.to_owned())] }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Self { text: Some(text), inline_data: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
    speech_config: SpeechConfig,
}

impl GenerationConfig {
    fn speech(voice: &str) -> Self {
        Self {
            response_modalities: vec!["AUDIO"],
            speech_config: SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig { voice_name: voice.to_owned() },
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.first_parts().iter().filter_map(|part| part.text.as_deref()).collect()
    }

    /// Base64 payload of the first part, when it carries inline data.
    fn audio_data(&self) -> Option<&str> {
        self.first_parts()
            .first()
            .and_then(|part| part.inline_data.as_ref())
            .map(|inline| inline.data.as_str())
    }
}
