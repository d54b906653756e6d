//! quillview CLI - Quill document conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use quillview::{parse_file, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "quillview")]
#[command(version)]
#[command(about = "Convert Sinclair QL Quill documents to text and HTML", long_about = None)]
struct Cli {
    /// Input Quill document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Quill document to annotated plain text
    #[command(alias = "txt")]
    Text {
        /// Input Quill document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a Quill document to HTML
    Html {
        /// Input Quill document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the parsed document structures as JSON
    Json {
        /// Input Quill document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input Quill document
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
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Html { input, output }) => cmd_html(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: text conversion if input is provided
            if let Some(input) = cli.input {
                cmd_text(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: quillview <FILE> [OUTPUT]".yellow());
                println!("       quillview --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn render_options(input: &Path) -> RenderOptions {
    RenderOptions::new().with_source_name(input.display().to_string())
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let text = quillview::render::to_text(&doc, &render_options(input))?;
    write_or_print(output, &text)
}

fn cmd_html(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let html = quillview::render::to_html(&doc, &render_options(input))?;
    write_or_print(output, &html)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = quillview::render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: Quill document", "Format".bold());
    println!("{}: {}", "Paragraphs".bold(), doc.body_paragraph_count());
    println!("{}: {}", "Words".bold(), doc.layout.word_count);

    println!();
    println!("{}", "Page Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if doc.layout.page_length == 0 {
        println!("{}: continuous (no page breaks)", "Page length".bold());
    } else {
        println!("{}: {} lines", "Page length".bold(), doc.layout.page_length);
        println!(
            "{}: {} top, {} bottom",
            "Page margins".bold(),
            doc.layout.top_margin,
            doc.layout.bottom_margin
        );
    }

    let (min_left, max_right) = doc.margin_extrema();
    println!("{}: {} to {}", "Text columns".bold(), min_left, max_right);

    println!(
        "{}: {}",
        "Header".bold(),
        if doc.layout.header.is_present() {
            format!("{:?}", doc.layout.header).to_lowercase()
        } else {
            "none".to_string()
        }
    );
    println!(
        "{}: {}",
        "Footer".bold(),
        if doc.layout.footer.is_present() {
            format!("{:?}", doc.layout.footer).to_lowercase()
        } else {
            "none".to_string()
        }
    );

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "quillview".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Quill document converter for the Sinclair QL");
}
