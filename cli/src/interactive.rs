//! Interactive wizard loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use pptwizard::{
    AuthState, ContentCustomizationPatch, LayoutCustomizationPatch, PresentationApi, PreviewMethod,
    Step, Wizard,
};

use crate::{display, spinner};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Read one trimmed line after printing `label`. End of input is an error.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{} ", format!("{}:", label).bold());
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Read a password without echoing it.
pub fn prompt_password(label: &str) -> io::Result<String> {
    rpassword::prompt_password(format!("{} ", format!("{}:", label).bold()))
}

/// Read lines until a line holding a single `.`.
fn prompt_multiline(label: &str) -> io::Result<String> {
    println!("{} {}", label.bold(), "(finish with a line containing only '.')".dimmed());
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "." {
            return Ok(lines.join("\n"));
        }
        lines.push(line);
    }
    Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
}

pub async fn run<A: PresentationApi>(mut wizard: Wizard<A>, output_dir: &Path) -> CmdResult {
    println!("{}", "AI PPT Maker".magenta().bold());
    println!("{}", "Type 'q' at any menu to quit.".dimmed());

    loop {
        if wizard.auth_state() != AuthState::Authenticated {
            if wizard.auth_state() == AuthState::ReauthRequired {
                display::print_error(wizard.session());
            }
            login(&mut wizard).await?;
            continue;
        }

        println!();
        display::print_progress(wizard.current_step());
        display::print_view(&wizard.view());
        display::print_error(wizard.session());

        let keep_going = match wizard.current_step() {
            Step::Topic => topic_step(&mut wizard).await?,
            Step::Review => review_step(&mut wizard)?,
            Step::Design => design_step(&mut wizard).await?,
            Step::Download => download_step(&mut wizard, output_dir).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

async fn login<A: PresentationApi>(wizard: &mut Wizard<A>) -> CmdResult {
    println!("{}", "Please log in".yellow().bold());
    let username = prompt("Username")?;
    let password = prompt_password("Password")?;

    let pb = spinner("Signing in...");
    let result = wizard.login(&username, &password).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => println!("{}", "Logged in".green()),
        Err(e) => println!(
            "{} {}",
            "Login failed. Please check your credentials.".red(),
            e.to_string().dimmed()
        ),
    }
    Ok(())
}

/// Apply `key=value` to the content options.
fn content_patch(key: &str, value: &str) -> Result<ContentCustomizationPatch, pptwizard::Error> {
    let patch = ContentCustomizationPatch::new();
    Ok(match key {
        "detail" => patch.detail_level(value.parse()?),
        "engagement" => patch.engagement_level(value.parse()?),
        "examples" => patch.include_examples(value.parse()?),
        "industry" => patch.industry(value),
        "length" => patch.length(value.parse()?),
        "purpose" => patch.presentation_purpose(value.parse()?),
        "audience" => patch.target_audience(value.parse()?),
        "tone" => patch.tone(value.parse()?),
        other => return Err(pptwizard::Error::invalid_value("option", other)),
    })
}

/// Apply `key=value` to the layout options.
fn layout_patch(key: &str, value: &str) -> Result<LayoutCustomizationPatch, pptwizard::Error> {
    let patch = LayoutCustomizationPatch::new();
    Ok(match key {
        "slides" => patch.slide_range(value.parse()?),
        "visual" => patch.visual_preference(value.parse()?),
        "theme" => patch.theme(value.parse()?),
        other => return Err(pptwizard::Error::invalid_value("option", other)),
    })
}

fn split_option(input: &str) -> Option<(&str, &str)> {
    let (key, value) = input.split_once('=')?;
    Some((key.trim(), value.trim()))
}

async fn topic_step<A: PresentationApi>(wizard: &mut Wizard<A>) -> Result<bool, Box<dyn std::error::Error>> {
    println!(
        "{}",
        "Enter a topic, 'key=value' to change an option (see 'pptwizard options'), or 'g' to generate"
            .dimmed()
    );
    let input = prompt(">")?;
    match input.as_str() {
        "q" => return Ok(false),
        "g" => {
            let pb = spinner("Generating content...");
            let result = wizard.generate_content().await;
            pb.finish_and_clear();
            if let Err(e) = result {
                log::debug!("generate: {}", e);
            }
        }
        _ => match split_option(&input) {
            Some((key, value)) => match content_patch(key, value) {
                Ok(patch) => wizard.customize_content(patch),
                Err(e) => println!("{}", e.to_string().red()),
            },
            None => wizard.set_topic(input),
        },
    }
    Ok(true)
}

fn review_step<A: PresentationApi>(wizard: &mut Wizard<A>) -> Result<bool, Box<dyn std::error::Error>> {
    println!(
        "{}",
        "[c]ontinue  [e]dit  [a]ppend  [r]estore generated  [b]ack  [q]uit".dimmed()
    );
    match prompt(">")?.as_str() {
        "q" => return Ok(false),
        "c" => {
            if let Err(e) = wizard.continue_to_design() {
                log::debug!("continue: {}", e);
            }
        }
        "e" => {
            let text = prompt_multiline("New content")?;
            wizard.edit_content(text);
        }
        "a" => {
            let text = prompt_multiline("Text to append")?;
            let mut content = wizard.session().edited_content.clone();
            content.push_str(&text);
            wizard.edit_content(content);
        }
        "r" => {
            let generated = wizard.session().generated_content.clone();
            wizard.edit_content(generated);
        }
        "b" => back(wizard),
        other => println!("{} {}", "Unknown command".red(), other),
    }
    Ok(true)
}

async fn design_step<A: PresentationApi>(wizard: &mut Wizard<A>) -> Result<bool, Box<dyn std::error::Error>> {
    println!(
        "{}",
        "'key=value' to change slides/visual/theme, [c]reate, [b]ack, [q]uit".dimmed()
    );
    let input = prompt(">")?;
    match input.as_str() {
        "q" => return Ok(false),
        "c" => {
            let pb = spinner("Creating PowerPoint...");
            let result = wizard.create_presentation().await;
            pb.finish_and_clear();
            if let Err(e) = result {
                log::debug!("create: {}", e);
            }
        }
        "b" => back(wizard),
        _ => match split_option(&input) {
            Some((key, value)) => match layout_patch(key, value) {
                Ok(patch) => wizard.customize_layout(patch),
                Err(e) => println!("{}", e.to_string().red()),
            },
            None => println!("{} {}", "Unknown command".red(), input),
        },
    }
    Ok(true)
}

async fn download_step<A: PresentationApi>(
    wizard: &mut Wizard<A>,
    output_dir: &Path,
) -> Result<bool, Box<dyn std::error::Error>> {
    println!(
        "{}",
        "[d]ownload  [p]review [direct|blob|viewer]  [n]ew presentation  [b]ack  [q]uit".dimmed()
    );
    let input = prompt(">")?;
    let mut parts = input.split_whitespace();
    match parts.next().unwrap_or("") {
        "q" => return Ok(false),
        "d" => {
            let pb = spinner("Downloading...");
            let result = wizard.download(output_dir).await;
            pb.finish_and_clear();
            match result {
                Ok(path) => println!("{} {}", "Saved to".green().bold(), path.display()),
                Err(e) => log::debug!("download: {}", e),
            }
        }
        "p" => {
            let method = match parts.next() {
                Some(m) => match m.parse::<PreviewMethod>() {
                    Ok(m) => m,
                    Err(e) => {
                        println!("{}", e.to_string().red());
                        return Ok(true);
                    }
                },
                None => PreviewMethod::default(),
            };
            let pb = spinner("Loading preview...");
            let result = wizard.show_preview(method).await;
            pb.finish_and_clear();
            if let Err(e) = result {
                log::debug!("preview: {}", e);
            }
        }
        "n" => wizard.new_presentation(),
        "b" => back(wizard),
        other => println!("{} {}", "Unknown command".red(), other),
    }
    Ok(true)
}

fn back<A: PresentationApi>(wizard: &mut Wizard<A>) {
    if let Err(e) = wizard.back() {
        println!("{}", e.to_string().red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pptwizard::{Theme, Tone};

    #[test]
    fn test_split_option() {
        assert_eq!(split_option("tone = friendly"), Some(("tone", "friendly")));
        assert_eq!(split_option("Intro to ML"), None);
    }

    #[test]
    fn test_content_patch() {
        let patch = content_patch("tone", "Academic").unwrap();
        assert_eq!(patch.tone, Some(Tone::Academic));

        let patch = content_patch("industry", "healthcare").unwrap();
        assert_eq!(patch.industry.as_deref(), Some("healthcare"));

        assert!(content_patch("tone", "angry").is_err());
        assert!(content_patch("colour", "red").is_err());
    }

    #[test]
    fn test_layout_patch() {
        let patch = layout_patch("theme", "blue-spheres").unwrap();
        assert_eq!(patch.theme, Some(Theme::BlueSpheres));
        assert!(layout_patch("slides", "100").is_err());
    }
}
