//! CLI for md2html - Markdown to HTML converter and site generator

use clap::{Args, Parser, Subcommand};
use md2html::site::build_site;
use md2html::{ConvertOptions, MarkdownToHtml, SiteConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    build: BuildArgs,

    /// Log every generated page and copied file
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the site (default when no subcommand is given)
    Build(BuildArgs),
    /// Convert a single Markdown file and print the HTML fragment
    Convert {
        /// Input Markdown file path
        input: PathBuf,

        /// Output HTML file path (optional, prints to stdout if not specified)
        output: Option<PathBuf>,

        /// Tag of the element wrapping the document
        #[arg(long, default_value = "div")]
        root_tag: String,
    },
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Directory of static assets copied into the output
    #[arg(long = "static", default_value = "./static")]
    static_dir: PathBuf,

    /// Directory of Markdown content
    #[arg(long, default_value = "./content")]
    content: PathBuf,

    /// HTML template containing {{ Title }} and {{ Content }}
    #[arg(long, default_value = "./template.html")]
    template: PathBuf,

    /// Output directory (deleted and recreated)
    #[arg(long, default_value = "./public")]
    output: PathBuf,

    /// Base path prefixed to root-relative links
    #[arg(long, default_value = "/")]
    basepath: String,
}

impl From<BuildArgs> for SiteConfig {
    fn from(args: BuildArgs) -> Self {
        Self {
            static_dir: args.static_dir,
            content_dir: args.content,
            template_path: args.template,
            output_dir: args.output,
            basepath: args.basepath,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to INFO
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Command::Convert {
            input,
            output,
            root_tag,
        }) => convert(&input, output, root_tag),
        Some(Command::Build(args)) => build(args),
        None => build(cli.build),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build(args: BuildArgs) -> md2html::Result<()> {
    let config = SiteConfig::from(args);
    let report = build_site(&config)?;
    println!(
        "Generated {} pages and copied {} static files into {:?}",
        report.pages_generated, report.assets_copied, config.output_dir
    );
    Ok(())
}

fn convert(input: &Path, output: Option<PathBuf>, root_tag: String) -> md2html::Result<()> {
    let markdown = std::fs::read_to_string(input)?;
    let converter = MarkdownToHtml::new(ConvertOptions { root_tag });
    let html = converter.convert_to_string(&markdown)?;

    if let Some(output) = output {
        std::fs::write(&output, &html)?;
        println!("Successfully converted to {:?}", output);
    } else {
        println!("{}", html);
    }
    Ok(())
}
