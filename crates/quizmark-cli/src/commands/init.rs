//! The `quizmark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizmark.toml
    if std::path::Path::new("quizmark.toml").exists() {
        println!("quizmark.toml already exists, skipping.");
    } else {
        std::fs::write("quizmark.toml", SAMPLE_CONFIG)?;
        println!("Created quizmark.toml");
    }

    // Create example question document
    if std::path::Path::new("questions.md").exists() {
        println!("questions.md already exists, skipping.");
    } else {
        std::fs::write("questions.md", EXAMPLE_QUESTIONS)?;
        println!("Created questions.md");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions.md with your own sections and questions");
    println!("  2. Run: quizmark validate");
    println!("  3. Run: quizmark exam");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmark configuration

question_file = "questions.md"
duration_seconds = 1800
output_dir = "./quizmark-results"
"#;

const EXAMPLE_QUESTIONS: &str = r#"# General Knowledge

## What is the capital of France?
- [ ] Berlin
- [x] Paris
- [ ] Madrid
- [ ] Rome

## Which planet is known as the Red Planet?
- [ ] Venus
- [x] Mars
- [ ] Jupiter

# Arithmetic

## What is 12 × 12?
- [ ] 124
- [ ] 142
- [x] 144

## A train travels 60 km in 45 minutes.
What is its average speed in km/h?
- [ ] 60
- [x] 80
- [ ] 90
"#;
