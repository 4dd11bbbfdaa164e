use super::{page_metadata, TranscriptProvider, VideoTranscript};
use crate::config::TranscriptConfig;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::time::Duration;

#[derive(Serialize)]
struct TranscriptRequest {
    url: String,
}

#[derive(Deserialize)]
struct TranscriptResponse {
    transcript: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

/// Fetches transcripts from an HTTP transcript service.
///
/// The service receives `{"url": ...}` on `/api/transcript` and answers with the
/// transcript text and, when it knows them, the video title and author. Missing
/// metadata is scraped from the video page itself.
pub struct TranscriptServiceProvider {
    endpoint: String,
    client: Client,
}

impl TranscriptServiceProvider {
    pub fn new(service_url: &str, timeout: Duration) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let endpoint = format!("{}/api/transcript", service_url.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; VideoRecipeBot/1.0)")
            .build()?;
        Ok(Self { endpoint, client })
    }

    /// Build from configuration, falling back to the TRANSCRIPT_SERVICE_URL environment variable
    pub fn from_config(config: &TranscriptConfig) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let service_url = config
            .service_url
            .clone()
            .or_else(|| env::var("TRANSCRIPT_SERVICE_URL").ok())
            .ok_or("TRANSCRIPT_SERVICE_URL not found in config or environment")?;
        Self::new(&service_url, Duration::from_secs(config.timeout))
    }

    async fn fetch_page(&self, video_url: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        let response = self.client.get(video_url).send().await?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TranscriptProvider for TranscriptServiceProvider {
    async fn fetch(&self, video_url: &str) -> Result<VideoTranscript, Box<dyn Error + Send + Sync>> {
        info!("Fetching transcript for {}", video_url);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&TranscriptRequest {
                url: video_url.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!(
                "Transcript request failed with status: {}",
                response.status()
            )
            .into());
        }

        let body: TranscriptResponse = response.json().await?;
        if body.transcript.trim().is_empty() {
            return Err(format!("No transcript available for {}", video_url).into());
        }
        debug!("Transcript has {} characters", body.transcript.len());

        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let (title, author) = match (non_empty(body.title), non_empty(body.author)) {
            (Some(title), Some(author)) => (title, author),
            (title, author) => {
                debug!("Transcript service omitted metadata, reading video page");
                let metadata = page_metadata(&self.fetch_page(video_url).await?);
                (
                    title.unwrap_or(metadata.title),
                    author.unwrap_or(metadata.author),
                )
            }
        };

        Ok(VideoTranscript {
            title,
            author,
            transcript: body.transcript,
        })
    }
}
