use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_REQUEST_NAME: &str = "component.request.json";

const SAMPLE_REQUEST: &str = r##"{
  "componentName": "Primary Button",
  "category": "Buttons",
  "props": [
    { "name": "label", "type": "string", "defaultValue": "Click me" },
    { "name": "disabled", "type": "boolean" },
    { "name": "accent", "type": "color", "defaultValue": "#3366ff" }
  ]
}
"##;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Output directory for generated components
    #[arg(short, long, default_value = "stories")]
    pub out_dir: String,

    /// Category used when a request leaves it blank
    #[arg(short, long)]
    pub category: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing storygen project...".bright_blue().bold()
    );

    let request_path = PathBuf::from(cwd).join(SAMPLE_REQUEST_NAME);
    if !request_path.exists() {
        fs::write(&request_path, SAMPLE_REQUEST)?;
        println!("  {} Created {}", "✓".green(), SAMPLE_REQUEST_NAME);
    }

    let config = Config {
        out_dir: args.out_dir.clone(),
        default_category: args.category,
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", SAMPLE_REQUEST_NAME);
    println!("  2. Run: storygen generate {}", SAMPLE_REQUEST_NAME);
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_args(force: bool) -> InitArgs {
        InitArgs {
            out_dir: "ui".to_string(),
            category: Some("Kit".to_string()),
            force,
        }
    }

    #[test]
    fn test_init_writes_config_and_sample() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(init_args(false), cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.out_dir, "ui");
        assert_eq!(config.default_category, Some("Kit".to_string()));

        let sample = fs::read_to_string(dir.path().join(SAMPLE_REQUEST_NAME)).unwrap();
        let request: storygen_generator::GenerationRequest = serde_json::from_str(&sample).unwrap();
        assert_eq!(request.props.len(), 3);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "outDir": "keep" }"#).unwrap();

        init(init_args(false), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().out_dir, "keep");

        init(init_args(true), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().out_dir, "ui");
    }
}
