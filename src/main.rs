use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use url_player::commands::download::{build_download_request, save_download_instructions};
use url_player::core::catalog::mock_search_results;
use url_player::core::embed::EmbedUrlBuilder;
use url_player::core::models::{DownloadFormat, VideoQuality};
use url_player::core::resolver::resolve_or_error;
use url_player::{api, AppConfig, AppState, DirectorySink};

#[derive(Parser)]
#[command(
    name = "url-player",
    version,
    about = "Play YouTube links through the privacy-enhanced embed player"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
    /// Print the video id found in a pasted link
    Resolve { input: String },
    /// Print the embed URL for a pasted link
    Embed {
        input: String,
        #[arg(long)]
        autoplay: bool,
        #[arg(long, conflicts_with = "autoplay")]
        no_autoplay: bool,
        #[arg(long)]
        origin: Option<String>,
    },
    /// Print the canned search results for a query
    Search { query: String },
    /// Write a download-instructions file for a link or bare id
    Instructions {
        input: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        format: Option<DownloadFormat>,
        #[arg(long)]
        quality: Option<VideoQuality>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = url_player::load_config_or_default();
    url_player::init(&config.advanced.log_level)?;

    match cli.command {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Resolve { input } => {
            let reference = resolve_or_error(&input)?;
            println!("{}", reference);
            Ok(())
        }
        Command::Embed {
            input,
            autoplay,
            no_autoplay,
            origin,
        } => {
            let reference = resolve_or_error(&input)?;
            let origin = origin.unwrap_or_else(|| config.server.public_origin.clone());
            let builder = EmbedUrlBuilder::new(&origin);
            let autoplay = match (autoplay, no_autoplay) {
                (true, _) => true,
                (_, true) => false,
                _ => config.player.autoplay,
            };
            println!("{}", builder.embed_url(&reference, autoplay));
            Ok(())
        }
        Command::Search { query } => {
            let results = mock_search_results(query.trim());
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
        Command::Instructions {
            input,
            title,
            format,
            quality,
            out,
        } => instructions(&config, input, title, format, quality, out).await,
    }
}

async fn serve(mut config: AppConfig, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let addr = config.socket_addr()?;
    let app = api::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn instructions(
    config: &AppConfig,
    input: String,
    title: Option<String>,
    format: Option<DownloadFormat>,
    quality: Option<VideoQuality>,
    out: Option<PathBuf>,
) -> Result<()> {
    let request = build_download_request(
        &input,
        title.as_deref(),
        quality.unwrap_or(config.download.default_quality),
        format.unwrap_or(config.download.default_format),
    )?;

    let root = out.unwrap_or_else(|| PathBuf::from(&config.download.output_directory));
    let sink = DirectorySink::new(root);

    let path = save_download_instructions(&request, &sink, |progress| {
        tracing::debug!("{:?} {}%", progress.status, progress.progress);
    })
    .await?;

    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_is_handled_by_the_parser() {
        let err = Cli::try_parse_from(["url-player", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_autoplay_flags_conflict() {
        let err = Cli::try_parse_from([
            "url-player",
            "embed",
            "https://youtu.be/dQw4w9WgXcQ",
            "--autoplay",
            "--no-autoplay",
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_instructions_arguments() {
        let cli = Cli::try_parse_from([
            "url-player",
            "instructions",
            "9bZkp7q19f0",
            "--format",
            "mp3",
            "--quality",
            "low",
        ])
        .unwrap();

        match cli.command {
            Command::Instructions {
                input,
                format,
                quality,
                ..
            } => {
                assert_eq!(input, "9bZkp7q19f0");
                assert_eq!(format, Some(DownloadFormat::Mp3));
                assert_eq!(quality, Some(VideoQuality::Low));
            }
            _ => panic!("expected instructions command"),
        }
    }
}
