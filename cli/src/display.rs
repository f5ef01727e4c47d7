//! Terminal rendering for options and step views.

use colored::Colorize;

use pptwizard::{
    ContentCustomization, ContentLength, DetailLevel, EngagementLevel, ExampleDensity,
    LayoutCustomization, PresentationPurpose, Session, SlideRange, Step, StepView, TargetAudience,
    Theme, Tone, VisualPreference,
};

/// Print one option group as `name: value (Label), ...`.
macro_rules! print_group {
    ($title:expr, $ty:ty) => {
        println!("  {}", $title.bold());
        for v in <$ty>::ALL {
            println!("    {:<22} {}", v.as_str().cyan(), v.label().dimmed());
        }
    };
}

pub fn print_options() {
    println!("{}", "Content options".yellow().bold());
    print_group!("--detail", DetailLevel);
    print_group!("--engagement", EngagementLevel);
    print_group!("--examples", ExampleDensity);
    print_group!("--length", ContentLength);
    print_group!("--purpose", PresentationPurpose);
    print_group!("--audience", TargetAudience);
    print_group!("--tone", Tone);
    println!();
    println!("{}", "Layout options".yellow().bold());
    print_group!("--slides", SlideRange);
    print_group!("--visual", VisualPreference);
    print_group!("--theme", Theme);
}

pub fn print_progress(current: Step) {
    let line: Vec<String> = Step::ALL
        .iter()
        .map(|s| {
            let text = s.to_string();
            if *s == current {
                text.magenta().bold().to_string()
            } else if s.number() < current.number() {
                text.green().to_string()
            } else {
                text.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", line.join("  >  "));
}

pub fn print_content_options(c: &ContentCustomization) {
    println!("  {:<12} {}", "Detail:", c.detail_level.label());
    println!("  {:<12} {}", "Engagement:", c.engagement_level.label());
    println!("  {:<12} {}", "Examples:", c.include_examples.label());
    println!("  {:<12} {}", "Industry:", c.industry);
    println!("  {:<12} {}", "Length:", c.length.label());
    println!("  {:<12} {}", "Purpose:", c.presentation_purpose.label());
    println!("  {:<12} {}", "Audience:", c.target_audience.label());
    println!("  {:<12} {}", "Tone:", c.tone.label());
}

pub fn print_layout_options(l: &LayoutCustomization) {
    println!("  {:<12} {}", "Slides:", l.slide_range.label());
    println!("  {:<12} {}", "Visuals:", l.visual_preference.label());
    println!("  {:<12} {}", "Theme:", l.theme.label());
}

pub fn print_view(view: &StepView<'_>) {
    match view {
        StepView::Topic {
            topic,
            customization,
        } => {
            if !topic.is_empty() {
                println!("  {:<12} {}", "Topic:", topic.cyan());
            }
            print_content_options(customization);
        }
        StepView::Review { content } => {
            println!("{}", "-".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "-".repeat(60).dimmed());
        }
        StepView::Design { topic, layout } => {
            println!("  {:<12} {}", "Topic:", topic.cyan());
            print_layout_options(layout);
        }
        StepView::Download {
            topic,
            layout,
            output_file,
            preview,
        } => {
            println!("  {:<12} {}", "Topic:", topic.cyan());
            println!("  {:<12} {}", "Theme:", layout.theme.label());
            println!("  {:<12} {}", "Slides:", layout.slide_range.label());
            println!("  {:<12} {}", "File:", output_file);
            if let Some(p) = preview {
                println!("  {:<12} [{}] {}", "Preview:", p.method(), p.url().underline());
            }
        }
    }
}

pub fn print_error(session: &Session) {
    if let Some(err) = &session.error {
        println!("{} {}", "!".red().bold(), err.red());
    }
}

pub fn print_summary(session: &Session) {
    println!("{}", "Presentation Summary".yellow().bold());
    println!("  {:<12} {}", "Topic:", session.topic.cyan());
    print_layout_options(&session.layout_customization);
    println!("  {:<12} {}", "File:", session.output_file);
}
