//! pptwizard CLI - AI presentation maker

mod display;
mod interactive;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pptwizard::api::urls;
use pptwizard::{
    download_file_name, ApiClient, ClientConfig, ContentCustomizationPatch, ContentLength,
    DetailLevel, EngagementLevel, ExampleDensity, LayoutCustomizationPatch, PresentationApi,
    PresentationPurpose, PreviewMethod, SlideRange, TargetAudience, Theme, Tone, VisualPreference,
    Wizard,
};

#[derive(Parser)]
#[command(name = "pptwizard")]
#[command(version)]
#[command(about = "Generate PowerPoint presentations from a topic", long_about = None)]
struct Cli {
    /// Base address of the presentation service
    #[arg(long, global = true, env = "PPTWIZARD_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// File the access token is stored in
    #[arg(long, global = true, env = "PPTWIZARD_TOKEN_FILE", value_name = "FILE")]
    token_file: Option<PathBuf>,

    /// Request timeout in seconds (transport default if not set)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the access token
    Login {
        /// Username
        #[arg(short, long)]
        username: Option<String>,

        /// Password
        #[arg(short, long, env = "PPTWIZARD_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored access token
    Logout,

    /// Step through topic, review, design and download interactively
    #[command(alias = "w")]
    Wizard {
        /// Directory downloads are saved to
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Generate, render and download a presentation in one go
    #[command(alias = "gen")]
    Generate {
        /// Presentation topic
        #[arg(value_name = "TOPIC")]
        topic: String,

        /// Directory the presentation is saved to
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Also save the generated content as Markdown
        #[arg(long, value_name = "FILE")]
        save_content: Option<PathBuf>,

        /// Render this Markdown file instead of the generated content
        #[arg(long, value_name = "FILE")]
        content_file: Option<PathBuf>,

        #[command(flatten)]
        content: ContentArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print a preview URL for a rendered file
    Preview {
        /// Service-side path of the rendered file
        #[arg(value_name = "FILEPATH")]
        filepath: String,

        /// direct (file URL), blob (the service's inline preview URL; nothing is
        /// fetched) or viewer (Office web viewer). `pptwizard wizard` fetches
        /// blob previews into a local file
        #[arg(short, long, default_value = "viewer")]
        method: PreviewMethod,
    },

    /// Download a rendered file
    Download {
        /// Service-side path of the rendered file
        #[arg(value_name = "FILEPATH")]
        filepath: String,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Topic used to name the file
        #[arg(long)]
        topic: Option<String>,
    },

    /// List the available themes and content options
    #[command(alias = "themes")]
    Options,

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct ContentArgs {
    /// overview, intermediate, deep_dive, expert_level
    #[arg(long)]
    detail: Option<DetailLevel>,

    /// informational, interactive, highly_engaging
    #[arg(long)]
    engagement: Option<EngagementLevel>,

    /// none, minimal, moderate, extensive
    #[arg(long)]
    examples: Option<ExampleDensity>,

    /// Industry (free text)
    #[arg(long)]
    industry: Option<String>,

    /// brief, moderate, descriptive, comprehensive
    #[arg(long)]
    length: Option<ContentLength>,

    /// sales_pitch, conference_talk, educational, training, ...
    #[arg(long)]
    purpose: Option<PresentationPurpose>,

    /// general, students, technical_experts, executives
    #[arg(long)]
    audience: Option<TargetAudience>,

    /// casual, friendly, professional, academic, persuasive, technical
    #[arg(long)]
    tone: Option<Tone>,
}

impl From<ContentArgs> for ContentCustomizationPatch {
    fn from(args: ContentArgs) -> Self {
        ContentCustomizationPatch {
            detail_level: args.detail,
            engagement_level: args.engagement,
            include_examples: args.examples,
            industry: args.industry,
            length: args.length,
            presentation_purpose: args.purpose,
            target_audience: args.audience,
            tone: args.tone,
        }
    }
}

#[derive(Args, Default)]
struct LayoutArgs {
    /// Theme id (see `pptwizard options`)
    #[arg(long)]
    theme: Option<Theme>,

    /// 3-5, 6-9, 10-15, 16+
    #[arg(long)]
    slides: Option<SlideRange>,

    /// minimal, visual_heavy, balanced
    #[arg(long)]
    visual: Option<VisualPreference>,
}

impl From<LayoutArgs> for LayoutCustomizationPatch {
    fn from(args: LayoutArgs) -> Self {
        LayoutCustomizationPatch {
            slide_range: args.slides,
            visual_preference: args.visual,
            theme: args.theme,
        }
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    let result = match cli.command {
        Some(Commands::Login { username, password }) => cmd_login(config, username, password),
        Some(Commands::Logout) => cmd_logout(config),
        Some(Commands::Wizard { output }) => cmd_wizard(config, output),
        Some(Commands::Generate {
            topic,
            output,
            save_content,
            content_file,
            content,
            layout,
        }) => cmd_generate(
            config,
            &topic,
            output.as_deref(),
            save_content.as_deref(),
            content_file.as_deref(),
            content.into(),
            layout.into(),
        ),
        Some(Commands::Preview { filepath, method }) => cmd_preview(config, &filepath, method),
        Some(Commands::Download {
            filepath,
            output,
            topic,
        }) => cmd_download(config, &filepath, output, topic.as_deref()),
        Some(Commands::Options) => {
            display::print_options();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_wizard(config, None),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(path) = &cli.token_file {
        config = config.with_token_path(path.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

fn cmd_login(config: ClientConfig, username: Option<String>, password: Option<String>) -> CmdResult {
    let username = match username {
        Some(u) => u,
        None => interactive::prompt("Username")?,
    };
    let password = match password {
        Some(p) => p,
        None => interactive::prompt_password("Password")?,
    };

    let rt = runtime()?;
    rt.block_on(async {
        let pb = spinner("Signing in...");
        let result = pptwizard::login(config, &username, &password).await;
        pb.finish_and_clear();
        result.map_err(|e| format!("Login failed. Please check your credentials. ({})", e))
    })?;

    println!("{} as {}", "Logged in".green().bold(), username.cyan());
    Ok(())
}

fn cmd_logout(config: ClientConfig) -> CmdResult {
    pptwizard::logout(config)?;
    println!("{}", "Logged out".green());
    Ok(())
}

fn cmd_wizard(config: ClientConfig, output: Option<PathBuf>) -> CmdResult {
    let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
    let wizard = Wizard::new(ApiClient::new(config)?);

    let rt = runtime()?;
    rt.block_on(interactive::run(wizard, &output_dir))
}

fn cmd_generate(
    config: ClientConfig,
    topic: &str,
    output: Option<&Path>,
    save_content: Option<&Path>,
    content_file: Option<&Path>,
    content: ContentCustomizationPatch,
    layout: LayoutCustomizationPatch,
) -> CmdResult {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    let replacement = match content_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let mut wizard = Wizard::new(ApiClient::new(config)?);
    if !wizard.auth_state().is_authenticated() {
        return Err("Not logged in. Run 'pptwizard login' first.".into());
    }
    wizard.set_topic(topic);
    wizard.customize_content(content);
    wizard.customize_layout(layout);

    let rt = runtime()?;
    let saved = rt.block_on(async {
        let pb = ProgressBar::new(3);
        if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {msg}") {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        pb.set_message("Generating content...");
        wizard.generate_content().await?;
        pb.inc(1);

        if let Some(path) = save_content {
            fs::write(path, &wizard.session().generated_content)?;
        }
        if let Some(text) = replacement {
            wizard.edit_content(text);
        }
        wizard.continue_to_design()?;

        pb.set_message("Creating PowerPoint...");
        wizard.create_presentation().await?;
        pb.inc(1);

        pb.set_message("Downloading...");
        let saved = wizard.download(&output_dir).await?;
        pb.inc(1);
        pb.finish_with_message("Done!");

        Ok::<PathBuf, Box<dyn std::error::Error>>(saved)
    })?;

    let session = wizard.session();
    println!();
    display::print_summary(session);
    println!("{} {}", "Saved to".green().bold(), saved.display());
    if let Some(path) = save_content {
        println!("{} {}", "Content saved to".green(), path.display());
    }
    Ok(())
}

fn cmd_preview(config: ClientConfig, filepath: &str, method: PreviewMethod) -> CmdResult {
    let client = ApiClient::new(config)?;
    let url = match method {
        PreviewMethod::Direct => client.direct_url(filepath),
        PreviewMethod::Blob => client.preview_url(filepath)?,
        PreviewMethod::Viewer => client.viewer_url(filepath)?,
    };
    println!("{}", url);
    Ok(())
}

fn cmd_download(
    config: ClientConfig,
    filepath: &str,
    output: Option<PathBuf>,
    topic: Option<&str>,
) -> CmdResult {
    let target = output.unwrap_or_else(|| match topic {
        Some(t) => PathBuf::from(download_file_name(t)),
        None => PathBuf::from(
            Path::new(filepath)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| download_file_name("")),
        ),
    });

    let client = ApiClient::new(config)?;
    let rt = runtime()?;
    let bytes = rt.block_on(async {
        let pb = spinner("Preparing download...");
        let result = client.download(filepath).await;
        pb.finish_and_clear();
        result
    })?;

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&target, &bytes)?;
    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        target.display(),
        bytes.len()
    );
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pptwizard".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("AI presentation maker");
    println!();
    println!("Default service: {}", pptwizard::DEFAULT_API_URL.dimmed());
    println!("Office viewer: {}", urls::OFFICE_VIEWER_URL.dimmed());
    println!("License: MIT");
}
