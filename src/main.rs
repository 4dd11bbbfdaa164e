use clap::{ArgGroup, Parser, ValueEnum};
use log::{debug, error, info, LevelFilter};
use std::path::PathBuf;
use video_recipe::{OutputFormat, Provider, RecipeImporter};

#[derive(Parser, Debug)]
#[command(name = "video-recipe")]
#[command(about = "Turn a cooking video into a printable recipe")]
#[command(group(ArgGroup::new("source").required(true).args(["url", "record"])))]
struct Cli {
    /// URL of the video to generate the recipe from
    #[arg(long)]
    url: Option<String>,

    /// Saved recipe record (JSON) to render without regenerating it
    #[arg(long)]
    record: Option<PathBuf>,

    /// Directory to save recipes to (default: recipes/)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Document format (default: markdown)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Also save the structured recipe as JSON next to the document
    #[arg(long)]
    save_record: bool,

    /// Generation provider (defaults to the configured one)
    #[arg(long, value_enum)]
    provider: Option<ProviderArg>,

    /// Model name for the generation provider
    #[arg(long)]
    model: Option<String>,

    /// Show progress logs
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Markdown,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ProviderArg {
    Google,
    Openai,
    Anthropic,
}

impl From<ProviderArg> for Provider {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Google => Provider::Google,
            ProviderArg::Openai => Provider::OpenAI,
            ProviderArg::Anthropic => Provider::Anthropic,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
    debug!("{:?}", cli);

    let mut builder = RecipeImporter::builder();

    if let Some(url) = &cli.url {
        info!("Video URL: {}", url);
        builder = builder.url(url);
    }
    if let Some(record) = &cli.record {
        info!("Rendering saved record: {}", record.display());
        builder = builder.record(record);
    }
    if let Some(output_dir) = &cli.output_dir {
        info!("Saving to: {}", output_dir.display());
        builder = builder.output_dir(output_dir);
    }
    if let Some(format) = cli.format {
        builder = builder.format(format.into());
    }
    if cli.save_record {
        builder = builder.save_record(true);
    }
    if let Some(provider) = cli.provider {
        builder = builder.provider(provider.into());
    }
    if let Some(model) = cli.model {
        builder = builder.model(model);
    }

    match builder.build().await {
        Ok(output) => {
            println!("{}", output.document_path.display());
            if let Some(record_path) = output.record_path {
                info!("Recipe record saved to {}", record_path.display());
            }
            Ok(())
        }
        Err(e) => {
            error!("Recipe creation failed: {}", e);
            Err(e.into())
        }
    }
}
