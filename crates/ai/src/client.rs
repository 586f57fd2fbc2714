//! REST API client for the Gemini `generateContent` endpoints.
//!
//! Wraps text generation, vision analysis (text plus an inline image),
//! and diagram image generation using [`reqwest`].

use serde::Deserialize;

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base HTTP URL, e.g. `https://generativelanguage.googleapis.com`.
    pub api_url: String,
    /// API key appended as the `key` query parameter.
    pub api_key: String,
    /// Model used for text and vision requests.
    pub text_model: String,
    /// Model used for diagram image generation.
    pub image_model: String,
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but carried no usable candidate content.
    #[error("Gemini returned an empty response")]
    EmptyResponse,
}

// ---- response body ----

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "inlineData", default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(default)]
    data: String,
}

impl GeminiClient {
    /// Create a new client from connection settings.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// Run a text-only generation against the text model.
    pub async fn generate(&self, system: &str, prompt: &str) -> Result<String, GeminiError> {
        let body = serde_json::json!({
            "systemInstruction": { "parts": [{ "text": system }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self.post(&self.config.text_model, &body).await?;
        Self::first_text(response)
    }

    /// Run a vision request: the prompt plus one inline base64 image.
    pub async fn generate_with_image(
        &self,
        system: &str,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, GeminiError> {
        let body = serde_json::json!({
            "systemInstruction": { "parts": [{ "text": system }] },
            "contents": [{ "parts": [
                { "text": prompt },
                { "inlineData": { "mimeType": mime_type, "data": image_base64 } },
            ] }],
        });

        let response = self.post(&self.config.text_model, &body).await?;
        Self::first_text(response)
    }

    /// Ask the image model for a technical diagram. Returns the base64
    /// image data of the first image part, or `None` when the model
    /// replied with text only.
    pub async fn generate_diagram(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<Option<String>, GeminiError> {
        let body = serde_json::json!({
            "systemInstruction": { "parts": [{ "text": system }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["IMAGE", "TEXT"] },
        });

        let response = self.post(&self.config.image_model, &body).await?;
        Ok(Self::first_image(response))
    }

    // ---- private helpers ----

    async fn post(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<GenerateResponse, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(model, status = status.as_u16(), "Gemini request failed");
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateResponse>().await?)
    }

    /// Concatenate the text parts of the first candidate.
    fn first_text(response: GenerateResponse) -> Result<String, GeminiError> {
        let parts = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }

    /// Pull the first inline image out of the first candidate.
    fn first_image(response: GenerateResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .find_map(|p| p.inline_data)
            .map(|d| d.data)
            .filter(|data| !data.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(json: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn first_text_concatenates_parts() {
        let response = response_from(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Hello " },
                { "text": "world" },
            ] } }],
        }));
        assert_eq!(GeminiClient::first_text(response).unwrap(), "Hello world");
    }

    #[test]
    fn first_text_empty_candidates_is_an_error() {
        let response = response_from(serde_json::json!({ "candidates": [] }));
        assert!(matches!(
            GeminiClient::first_text(response),
            Err(GeminiError::EmptyResponse)
        ));
    }

    #[test]
    fn first_image_skips_text_parts() {
        let response = response_from(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here is your diagram:" },
                { "inlineData": { "mimeType": "image/png", "data": "aGVsbG8=" } },
            ] } }],
        }));
        assert_eq!(
            GeminiClient::first_image(response),
            Some("aGVsbG8=".to_string())
        );
    }

    #[test]
    fn first_image_none_when_text_only() {
        let response = response_from(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "no image" }] } }],
        }));
        assert_eq!(GeminiClient::first_image(response), None);
    }
}
