use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate static HTML pages from Markdown")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate the configured page
    Build {
        /// Config file (missing file means defaults)
        #[arg(short, long, default_value = "mdsite.toml")]
        config: PathBuf,
    },
    /// Convert a single Markdown file
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// HTML template with {{ Title }} and {{ Content }} placeholders
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Build { config } => build(&config),
        Command::Render {
            input,
            template,
            output,
        } => render(&input, template.as_deref(), output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build(config_path: &Path) -> mdsite::Result<()> {
    let config = mdsite::Config::load(config_path)?;
    mdsite::site::build(&config)?;
    log::info!("Built site in {}", config.site.public_dir.display());
    Ok(())
}

fn render(input: &Path, template: Option<&Path>, output: Option<&Path>) -> mdsite::Result<()> {
    let markdown = read(input)?;

    let html = match template {
        Some(template) => mdsite::render_page(&read(template)?, &markdown)?,
        None => mdsite::markdown_to_html(&markdown)?,
    };

    match output {
        Some(output) => {
            fs::write(output, html).map_err(|source| mdsite::Error::Io {
                path: output.to_path_buf(),
                source,
            })?;
            log::info!("Created {}", output.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn read(path: &Path) -> mdsite::Result<String> {
    fs::read_to_string(path).map_err(|source| mdsite::Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
