mod metadata;
mod service;

pub use metadata::{page_metadata, PageMetadata, UNKNOWN_AUTHOR, UNTITLED_RECIPE};
pub use service::TranscriptServiceProvider;

use async_trait::async_trait;
use std::error::Error;

/// Spoken transcript of a video together with the metadata shown on the rendered recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoTranscript {
    pub title: String,
    pub author: String,
    pub transcript: String,
}

/// Source of transcripts for a video reference.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(&self, video_url: &str) -> Result<VideoTranscript, Box<dyn Error + Send + Sync>>;
}
