use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use newsbrief::{
    SupportedLanguage, TranslationResult, config::Config, process_article,
    summarizer::SummarizeTranslateClient, telemetry,
};

/// Summarize a news article in English and translate the summary.
#[derive(Debug, Parser)]
#[command(name = "newsbrief", version, about)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "text", "file"])))]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Article URL to fetch and extract
    #[arg(short, long)]
    url: Option<String>,

    /// Article text given inline
    #[arg(short, long)]
    text: Option<String>,

    /// Read article text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Target language for the translation (e.g. Telugu, French, Japanese)
    #[arg(short, long, required = true)]
    language: Option<SupportedLanguage>,

    /// Print the result as JSON instead of text blocks
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the supported target languages
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let cli = Cli::parse();

    if let Some(Command::Languages) = cli.command {
        for name in SupportedLanguage::names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let language = cli
        .language
        .context("a target language is required (--language)")?;

    // Fail on a missing key before touching the network.
    let config = Config::from_env().context("Failed to load configuration")?;
    let client = SummarizeTranslateClient::new(&config);

    let text = match &cli.file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => cli.text.clone(),
    };

    let result = process_article(&client, text.as_deref(), cli.url.as_deref(), language).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(exit_code(&result));
    }

    match &result {
        TranslationResult::Success {
            summary,
            translation,
            warning,
        } => {
            if let Some(warning) = warning {
                eprintln!("warning: the model reply could not be parsed ({warning:?})");
            }
            print_block("English Summary", summary);
            println!();
            print_block(&format!("{language} Translation"), translation);
        }
        TranslationResult::Failure { message, .. } => {
            eprintln!("Error processing article: {message}");
        }
    }
    Ok(exit_code(&result))
}

fn print_block(heading: &str, body: &str) {
    println!("{heading}");
    println!("{}", "-".repeat(heading.chars().count()));
    println!("{body}");
}

fn exit_code(result: &TranslationResult) -> ExitCode {
    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
