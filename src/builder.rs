use std::path::PathBuf;

use config::ConfigError;
use log::{info, warn};

use crate::config::{OutputFormat, PipelineConfig, ProviderConfig};
use crate::model::Recipe;
use crate::providers::{FallbackProvider, LlmProvider};
use crate::render::{document_path, renderer_for, write_document};
use crate::transcript::{TranscriptProvider, TranscriptServiceProvider};
use crate::{parser, record, ImportError};

/// Where the recipe comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Run the full pipeline for a video URL
    Url(String),
    /// Render a previously saved recipe record, skipping transcript and generation
    Record(PathBuf),
}

/// Generation provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    OpenAI,
    Anthropic,
}

impl Provider {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            Provider::Google => "gemini-2.0-flash",
            Provider::OpenAI => "gpt-4o-mini",
            Provider::Anthropic => "claude-sonnet-4-5",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "google" => Some(Provider::Google),
            "openai" => Some(Provider::OpenAI),
            "anthropic" => Some(Provider::Anthropic),
            _ => None,
        }
    }
}

/// Result of a finished import
#[derive(Debug, Clone)]
pub struct ImportOutput {
    /// The recipe that was rendered
    pub recipe: Recipe,
    /// Where the rendered document was written
    pub document_path: PathBuf,
    /// Where the structured record was saved, if requested
    pub record_path: Option<PathBuf>,
}

/// Builder for configuring and running the video → recipe pipeline
#[derive(Default)]
pub struct RecipeImporterBuilder {
    url: Option<String>,
    record: Option<PathBuf>,
    config: Option<PipelineConfig>,
    output_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    save_record: Option<bool>,
    provider: Option<Provider>,
    api_key: Option<String>,
    model: Option<String>,
    transcript_provider: Option<Box<dyn TranscriptProvider>>,
    llm_provider: Option<Box<dyn LlmProvider>>,
}

impl RecipeImporterBuilder {
    /// Generate the recipe from a video URL
    ///
    /// # Example
    /// ```
    /// use video_recipe::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://www.youtube.com/watch?v=VIdlVi-VzPY");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Render a recipe record saved by an earlier run
    ///
    /// Cannot be combined with [`url`](Self::url).
    pub fn record(mut self, path: impl Into<PathBuf>) -> Self {
        self.record = Some(path.into());
        self
    }

    /// Use an explicit configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Directory the document (and record) are written to
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Also save the structured recipe as JSON next to the document
    pub fn save_record(mut self, save: bool) -> Self {
        self.save_record = Some(save);
        self
    }

    /// Set the generation provider
    ///
    /// # Example
    /// ```
    /// use video_recipe::{Provider, RecipeImporter};
    ///
    /// let builder = RecipeImporter::builder()
    ///     .url("https://www.youtube.com/watch?v=VIdlVi-VzPY")
    ///     .provider(Provider::OpenAI);
    /// ```
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the generation provider
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the generation provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Use a custom transcript source instead of the configured transcript service
    pub fn transcript_provider(mut self, provider: impl TranscriptProvider + 'static) -> Self {
        self.transcript_provider = Some(Box::new(provider));
        self
    }

    /// Use a custom generation client instead of the configured providers
    pub fn llm_provider(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.llm_provider = Some(Box::new(provider));
        self
    }

    /// Run the pipeline and write the document
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - Neither or both of a URL and a record were given
    /// - The transcript cannot be fetched
    /// - The generation call fails
    /// - The record cannot be read, or the document cannot be written
    ///
    /// # Example
    /// ```no_run
    /// # use video_recipe::RecipeImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let output = RecipeImporter::builder()
    ///     .url("https://www.youtube.com/watch?v=VIdlVi-VzPY")
    ///     .build()
    ///     .await?;
    /// println!("{}", output.document_path.display());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ImportOutput, ImportError> {
        let source = match (self.url, self.record) {
            (Some(url), None) => InputSource::Url(url),
            (None, Some(path)) => InputSource::Record(path),
            (None, None) => {
                return Err(ImportError::BuilderError(
                    "No input source specified. Use .url() or .record()".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(ImportError::BuilderError(
                    "Use either .url() or .record(), not both".to_string(),
                ))
            }
        };

        let mut config = resolve_config(self.config, &source, PipelineConfig::load)?;
        apply_provider_overrides(&mut config, self.provider, self.api_key, self.model);

        let recipe = match source {
            InputSource::Url(url) => {
                let transcripts: Box<dyn TranscriptProvider> = match self.transcript_provider {
                    Some(provider) => provider,
                    None => Box::new(
                        TranscriptServiceProvider::from_config(&config.transcript)
                            .map_err(|e| ImportError::TranscriptError(e.to_string()))?,
                    ),
                };
                let generator: Box<dyn LlmProvider> = match self.llm_provider {
                    Some(provider) => provider,
                    None => Box::new(
                        FallbackProvider::new(&config)
                            .map_err(|e| ImportError::GenerationError(e.to_string()))?,
                    ),
                };
                recipe_from_video(&url, transcripts.as_ref(), generator.as_ref()).await?
            }
            InputSource::Record(path) => record::load(&path).await?,
        };

        let output_dir = self
            .output_dir
            .unwrap_or_else(|| PathBuf::from(&config.output.directory));
        let renderer = renderer_for(self.format.unwrap_or(config.output.format));
        let document_path = document_path(&output_dir, &recipe, renderer.as_ref());

        // The record goes first so a failed render can be retried from it.
        let record_path = if self.save_record.unwrap_or(config.output.save_record) {
            let path = record::record_path_for(&document_path);
            record::save(&recipe, &path).await?;
            Some(path)
        } else {
            None
        };
        write_document(renderer.as_ref(), &recipe, &document_path).await?;

        Ok(ImportOutput {
            recipe,
            document_path,
            record_path,
        })
    }
}

/// Pick the configuration for a run.
///
/// Rendering a saved record needs no external services, so a configuration file that
/// fails to load only costs the output defaults there. A URL import still fails on it.
fn resolve_config(
    explicit: Option<PipelineConfig>,
    source: &InputSource,
    load: impl FnOnce() -> Result<PipelineConfig, ConfigError>,
) -> Result<PipelineConfig, ImportError> {
    if let Some(config) = explicit {
        return Ok(config);
    }
    match (load(), source) {
        (Ok(config), _) => Ok(config),
        (Err(e), InputSource::Record(_)) => {
            warn!("Ignoring unreadable configuration for record rendering: {}", e);
            Ok(PipelineConfig::default())
        }
        (Err(e), InputSource::Url(_)) => Err(e.into()),
    }
}

/// Fetch the transcript, generate sectioned text and parse it into a recipe.
pub async fn recipe_from_video(
    url: &str,
    transcripts: &dyn TranscriptProvider,
    generator: &dyn LlmProvider,
) -> Result<Recipe, ImportError> {
    let video = transcripts
        .fetch(url)
        .await
        .map_err(|e| ImportError::TranscriptError(e.to_string()))?;
    info!("Fetched transcript for '{}' by {}", video.title, video.author);

    let response = generator
        .generate(&video.transcript)
        .await
        .map_err(|e| ImportError::GenerationError(e.to_string()))?;

    let sections = parser::parse(&response);
    if sections.is_empty() {
        warn!("Generated text for '{}' contained no recognizable sections", video.title);
    }

    Ok(Recipe::new(video.title, video.author, sections))
}

fn apply_provider_overrides(
    config: &mut PipelineConfig,
    provider: Option<Provider>,
    api_key: Option<String>,
    model: Option<String>,
) {
    if let Some(provider) = provider {
        config.default_provider = provider.as_str().to_string();
    }
    if api_key.is_none() && model.is_none() && provider.is_none() {
        return;
    }

    let name = config.default_provider.clone();
    let default_model = Provider::from_name(&name)
        .map(|p| p.default_model())
        .unwrap_or_default()
        .to_string();
    let entry = config
        .providers
        .entry(name)
        .or_insert_with(|| ProviderConfig {
            enabled: true,
            model: default_model,
            temperature: 0.7,
            max_tokens: 4000,
            api_key: None,
            base_url: None,
        });

    if let Some(key) = api_key {
        entry.api_key = Some(key);
    }
    if let Some(model) = model {
        entry.model = model;
    }
    // Explicitly selected providers bypass any configured fallback chain.
    config.fallback.enabled = false;
}

/// Main entry point for the builder API
pub struct RecipeImporter;

impl RecipeImporter {
    /// Creates a new builder for importing recipes
    ///
    /// # Example
    /// ```
    /// use video_recipe::RecipeImporter;
    ///
    /// let builder = RecipeImporter::builder();
    /// ```
    pub fn builder() -> RecipeImporterBuilder {
        RecipeImporterBuilder::default()
    }
}
