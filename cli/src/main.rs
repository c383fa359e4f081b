//! askpdf CLI - ask questions about a PDF, get the answer as a PDF

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use askpdf::{
    answer, ChatCompletionClient, CompletionParams, ExtractOptions, PdfExtractor, RenderOptions,
};

#[derive(Parser)]
#[command(name = "askpdf")]
#[command(version)]
#[command(about = "Ask questions about a PDF and save the answer as a PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question about a PDF and save the reply as a PDF
    Ask {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// The question to ask about the document
        #[arg(value_name = "QUESTION")]
        question: String,

        /// API key for the completion service
        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Model identifier
        #[arg(long, default_value = askpdf::DEFAULT_MODEL)]
        model: String,

        /// Base URL of the OpenAI-compatible endpoint
        #[arg(long, default_value = askpdf::completion::DEFAULT_BASE_URL)]
        base_url: String,

        /// Number of pages to extract from
        #[arg(long, default_value_t = askpdf::DEFAULT_MAX_PAGES)]
        max_pages: u32,

        /// Output PDF file for the reply
        #[arg(short, long, value_name = "FILE", default_value = "Generated_Response.pdf")]
        output: PathBuf,

        /// Font size for the reply PDF, in points
        #[arg(long, default_value_t = askpdf::DEFAULT_FONT_SIZE)]
        font_size: f64,

        /// Margin for the reply PDF, in points
        #[arg(long, default_value_t = askpdf::DEFAULT_MARGIN)]
        margin: f64,

        /// Don't echo the reply text to stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract text from a PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Number of pages to extract from
        #[arg(long, default_value_t = askpdf::DEFAULT_MAX_PAGES)]
        max_pages: u32,
    },

    /// Render a text file (or stdin) as a paginated PDF
    Render {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE", default_value = "output.pdf")]
        output: PathBuf,

        /// Font size in points
        #[arg(long, default_value_t = askpdf::DEFAULT_FONT_SIZE)]
        font_size: f64,

        /// Margin in points
        #[arg(long, default_value_t = askpdf::DEFAULT_MARGIN)]
        margin: f64,

        /// Document title
        #[arg(long)]
        title: Option<String>,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask {
            input,
            question,
            api_key,
            model,
            base_url,
            max_pages,
            output,
            font_size,
            margin,
            quiet,
        } => cmd_ask(
            &input, &question, api_key, model, base_url, max_pages, &output, font_size, margin,
            quiet,
        ),
        Commands::Extract {
            input,
            output,
            max_pages,
        } => cmd_extract(&input, output.as_deref(), max_pages),
        Commands::Render {
            input,
            output,
            font_size,
            margin,
            title,
        } => cmd_render(&input, &output, font_size, margin, title),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_ask(
    input: &Path,
    question: &str,
    api_key: String,
    model: String,
    base_url: String,
    max_pages: u32,
    output: &Path,
    font_size: f64,
    margin: f64,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = fs::read(input)?;

    let extract_options = ExtractOptions::new().with_max_pages(max_pages);
    let render_options = RenderOptions::new()
        .with_font_size(font_size)
        .with_margin(margin);
    let client = ChatCompletionClient::new(api_key)
        .with_base_url(base_url)
        .with_params(CompletionParams::new().with_model(model));

    let pb = spinner("Extracting text and generating response...");
    let reply = answer(&document, question, &client, &extract_options);
    pb.finish_and_clear();
    let reply = reply?;
    log::debug!("received a reply of {} characters", reply.len());

    if !quiet {
        println!("{}", reply);
    }

    // The reply text above survives even if rendering fails below
    let pdf = askpdf::save_text_as_pdf_with_options(&reply, &render_options)?;
    fs::write(output, &pdf)?;
    println!("{} {}", "Saved reply to".green(), output.display());

    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    max_pages: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = askpdf::extract_text_from_file(input, max_pages)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_render(
    input: &Path,
    output: &Path,
    font_size: f64,
    margin: f64,
    title: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)?
    };

    let mut options = RenderOptions::new()
        .with_font_size(font_size)
        .with_margin(margin);
    if let Some(title) = title {
        options = options.with_title(title);
    }

    let pdf = askpdf::save_text_as_pdf_with_options(&text, &options)?;
    fs::write(output, &pdf)?;
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = PdfExtractor::open(input)?;

    println!("{}", "Document information:".green().bold());
    println!("  {} {}", "Version:".dimmed(), extractor.version());
    println!("  {} {}", "Pages:".dimmed(), extractor.page_count());
    println!(
        "  {} {}",
        "Encrypted:".dimmed(),
        if extractor.is_encrypted() { "yes" } else { "no" }
    );

    Ok(())
}

fn cmd_version() {
    println!("askpdf {}", env!("CARGO_PKG_VERSION"));
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
