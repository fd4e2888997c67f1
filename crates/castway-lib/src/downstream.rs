//! Clients for the two downstream services — script generation and
//! text-to-speech.
//!
//! Both are plain JSON-over-HTTP. No retries, no circuit breaking; a hung
//! downstream blocks only the task handling that request.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::config::Config;
use crate::error::GatewayError;

/// A persisted TTS response.
#[derive(Debug)]
pub struct AudioArtifact {
    pub path: PathBuf,
    pub bytes: u64,
    pub content_type: Option<String>,
}

pub struct DownstreamClient {
    client: reqwest::Client,
    script_url: String,
    audio_url: String,
}

impl DownstreamClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            script_url: config.script_service.url.clone(),
            audio_url: config.audio_service.url.clone(),
        }
    }

    /// Ask the script service to generate a script for a subject.
    ///
    /// Returns the identifier the service assigned to the new script.
    pub async fn request_script(
        &self,
        user_id: &str,
        subject: &str,
    ) -> Result<String, GatewayError> {
        let url = format!("{}/generate_script", self.script_url);
        let body = serde_json::json!({ "user_id": user_id, "subject": subject });

        debug!("POST {url} subject={subject:?}");
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(GatewayError::DownstreamUnreachable)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::DownstreamBadResponse(format!(
                "script service returned {status}: {text}"
            )));
        }

        let value: serde_json::Value = resp.json().await.map_err(|e| {
            GatewayError::DownstreamBadResponse(format!("script service sent invalid JSON: {e}"))
        })?;

        value
            .get("script_id")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                GatewayError::DownstreamBadResponse(
                    "script service response lacks script_id".to_string(),
                )
            })
    }

    /// Ask the TTS service to voice a script and stream the result to `dest`.
    ///
    /// Writes through a `.partial` sibling and renames on completion, so
    /// `dest` only ever holds a complete artifact.
    pub async fn fetch_audio(
        &self,
        user_id: &str,
        podcast_id: &str,
        podcast_name: &str,
        dest: &Path,
    ) -> Result<AudioArtifact, GatewayError> {
        let url = format!("{}/api/audio", self.audio_url);
        let body = serde_json::json!({
            "user_id": user_id,
            "podcast_id": podcast_id,
            "podcast_name": podcast_name,
        });

        debug!("POST {url} podcast_id={podcast_id}");
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(GatewayError::DownstreamUnreachable)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::DownstreamBadResponse(format!(
                "audio service returned {status}: {text}"
            )));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                GatewayError::AudioWrite(format!("create {}: {e}", parent.display()))
            })?;
        }

        let partial = partial_path(dest);
        let mut file = tokio::fs::File::create(&partial).await.map_err(|e| {
            GatewayError::AudioWrite(format!("create {}: {e}", partial.display()))
        })?;

        let mut bytes = 0u64;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                GatewayError::DownstreamBadResponse(format!("audio stream error: {e}"))
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| GatewayError::AudioWrite(format!("write chunk: {e}")))?;
            bytes += chunk.len() as u64;
        }

        file.flush()
            .await
            .map_err(|e| GatewayError::AudioWrite(format!("flush: {e}")))?;
        drop(file);

        tokio::fs::rename(&partial, dest).await.map_err(|e| {
            GatewayError::AudioWrite(format!("finalize {}: {e}", dest.display()))
        })?;

        Ok(AudioArtifact {
            path: dest.to_path_buf(),
            bytes,
            content_type,
        })
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    match dest.file_name().and_then(|n| n.to_str()) {
        Some(name) => dest.with_file_name(format!("{name}.partial")),
        None => dest.with_extension("partial"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_appends_suffix() {
        let dest = Path::new("/data/u1/audio/podcast_abc.wav");
        assert_eq!(
            partial_path(dest),
            Path::new("/data/u1/audio/podcast_abc.wav.partial")
        );
    }
}
