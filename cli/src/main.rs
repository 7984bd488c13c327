//! Sitesmith CLI — generate templates through a running server and export
//! templates to disk, mirroring the browser export.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Deserialize;

use template::{Document, export::plan_export, split_document};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("nothing to export: the document has no body markup, styles, or scripts")]
    NothingToExport,
}

#[derive(Parser, Debug)]
#[command(name = "sitesmith", about = "Sitesmith template generation and export CLI")]
struct Cli {
    /// Base URL of a running sitesmith server.
    #[arg(long, env = "SITESMITH_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a template from a description and write it to disk.
    Generate {
        /// Free-text website description.
        #[arg(long)]
        prompt: String,

        /// Output directory for the exported files.
        #[arg(long, default_value = "site")]
        out: PathBuf,
    },
    /// Split an existing HTML file into exported HTML/CSS/JS files.
    Export {
        /// Path to a complete HTML document.
        input: PathBuf,

        /// Output directory for the exported files.
        #[arg(long, default_value = "site")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate { prompt, out } => run_generate(&cli.base_url, &prompt, &out).await,
        Command::Export { input, out } => run_export(&input, &out),
    }
}

async fn run_generate(base_url: &str, prompt: &str, out: &Path) -> Result<(), CliError> {
    #[derive(serde::Serialize)]
    struct Body<'a> {
        prompt: &'a str,
    }

    #[derive(Deserialize)]
    struct GenerateResponse {
        html: String,
        model: String,
    }

    #[derive(Deserialize)]
    struct ErrorResponse {
        error: String,
    }

    let base = base_url.trim_end_matches('/');
    let response = reqwest::Client::new()
        .post(format!("{base}/api/generate"))
        .json(&Body { prompt })
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 200 {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map_or_else(|_| "unexpected response body".to_owned(), |body| body.error);
        return Err(CliError::Server { status, message });
    }

    let body: GenerateResponse = response.json().await?;
    eprintln!("generated with {}", body.model);

    write_export(&split_document(&body.html), out)
}

fn run_export(input: &Path, out: &Path) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(input)
        .map_err(|source| CliError::Io { path: input.to_path_buf(), source })?;
    write_export(&split_document(&raw), out)
}

/// Write the planned export files into `out`, creating it if needed.
fn write_export(doc: &Document, out: &Path) -> Result<(), CliError> {
    let files = plan_export(doc);
    if files.is_empty() {
        return Err(CliError::NothingToExport);
    }

    std::fs::create_dir_all(out).map_err(|source| CliError::Io { path: out.to_path_buf(), source })?;
    for file in files {
        let path = out.join(file.filename);
        std::fs::write(&path, &file.contents)
            .map_err(|source| CliError::Io { path: path.clone(), source })?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
