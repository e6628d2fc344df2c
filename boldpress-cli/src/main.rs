use anyhow::{Context, Result};
use boldpress::emphasis::{render_marked, split, KeywordSet};
use boldpress::letter::{Application, CoverLetter, LetterTemplate};
use boldpress::{personalize, Layout, LineSource, Profile, WriterConfig};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PREVIEW_WIDTH: usize = 80;

#[derive(Parser)]
#[command(
    name = "boldpress",
    about = "Generate CVs and cover letters with keywords in bold",
    version,
    author
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark keyword occurrences in a line of text
    Emphasize {
        /// Keyword or phrase to emphasize (repeatable)
        #[arg(short, long = "keyword", required = true)]
        keywords: Vec<String>,

        /// Line of text to split
        text: String,

        /// Print one segment per line instead of the marked text
        #[arg(long)]
        segments: bool,
    },

    /// Compose a cover letter from a profile and a template
    Letter {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Letter template JSON file
        #[arg(long)]
        template: PathBuf,

        /// Job title you are applying for
        #[arg(long, alias = "job_title", default_value = "Data Analyst")]
        job_title: String,

        /// Company name
        #[arg(long, default_value = "[Company Name]")]
        company: String,

        /// Name of recruiter or hiring manager
        #[arg(long)]
        recruiter: Option<String>,

        /// Output folder
        #[arg(short, long, alias = "output_dir", default_value = ".")]
        output_dir: PathBuf,

        /// Prompt interactively for customizing paragraphs
        #[arg(long)]
        personalize: bool,

        /// Letter date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        font: FontArgs,
    },

    /// Render a JSON layout into a document
    Build {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Layout JSON file
        #[arg(long)]
        layout: PathBuf,

        /// Output file path (.docx or .txt)
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        font: FontArgs,
    },
}

#[derive(clap::Args)]
struct FontArgs {
    /// Base font family
    #[arg(long, default_value = "Calibri")]
    font: String,

    /// Base font size in points
    #[arg(long, default_value_t = 11.0)]
    font_size: f64,
}

impl FontArgs {
    fn config(&self) -> WriterConfig {
        WriterConfig::new(&self.font, self.font_size)
    }
}

/// Reads personalization answers from the terminal.
struct StdinLines {
    stdin: io::Stdin,
}

impl StdinLines {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self, prompt: &str) -> boldpress::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "boldpress=debug"
    } else {
        "boldpress=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Emphasize {
            keywords,
            text,
            segments,
        } => {
            let keywords = KeywordSet::new(&keywords).context("Invalid keyword list")?;
            let parts = split(&text, &keywords);

            if segments {
                for segment in &parts {
                    let kind = if segment.emphasize { "bold" } else { "plain" };
                    println!("{kind}\t{:?}", segment.text);
                }
            } else {
                println!("{}", render_marked(&parts));
            }
        }

        Commands::Letter {
            profile,
            template,
            job_title,
            company,
            recruiter,
            output_dir,
            personalize: interactive,
            date,
            font,
        } => {
            let profile = load_profile(&profile)?;
            let template = LetterTemplate::load(&template)
                .with_context(|| format!("Failed to load template {}", template.display()))?;

            let mut application = Application::new(job_title, company);
            if let Some(recruiter) = recruiter.filter(|r| !r.trim().is_empty()) {
                application = application.with_recruiter(recruiter);
            }
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let mut letter = CoverLetter::from_template(&template, application, &profile, date)
                .context("Failed to compose cover letter")?;

            if interactive {
                println!("Running interactive personalization. Press Enter to accept defaults.\n");
                let replaced = personalize(&mut letter, &mut StdinLines::new())?;
                debug!(replaced, "paragraphs personalized");
            }

            fs::create_dir_all(&output_dir).with_context(|| {
                format!("Failed to create output directory {}", output_dir.display())
            })?;
            let stem = letter.output_stem();
            let docx_path = output_dir.join(format!("{stem}.docx"));
            let txt_path = output_dir.join(format!("{stem}.txt"));

            letter
                .to_document(&profile)
                .save_with_config(&docx_path, font.config())
                .with_context(|| format!("Failed to write {}", docx_path.display()))?;

            let letter_text = letter.render_text(&profile);
            fs::write(&txt_path, &letter_text)
                .with_context(|| format!("Failed to write {}", txt_path.display()))?;

            println!("Saved cover letter to: {}", docx_path.display());
            println!("Saved plain-text version to: {}", txt_path.display());
            println!("---\nPreview:\n");
            println!("{}", wrap(&letter_text, PREVIEW_WIDTH));
        }

        Commands::Build {
            profile,
            layout,
            output,
            font,
        } => {
            let profile = load_profile(&profile)?;
            let layout = Layout::load(&layout)
                .with_context(|| format!("Failed to load layout {}", layout.display()))?;

            let document = layout.render(&profile).context("Failed to render layout")?;
            document
                .save_with_config(&output, font.config())
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Saved document to: {}", output.display());
        }
    }

    Ok(())
}

fn load_profile(path: &Path) -> Result<Profile> {
    Profile::load(path).with_context(|| format!("Failed to load profile {}", path.display()))
}

/// Greedy word wrap, line by line, keeping blank lines.
fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for word in line.split_whitespace() {
            let word_width = word.chars().count();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }
    lines.join("\n")
}
