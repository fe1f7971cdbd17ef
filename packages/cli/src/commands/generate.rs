use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use storygen_generator::{GeneratedFileSet, GenerationRequest, NodeStyleInfo};
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Generation request JSON file (componentName, category, props)
    pub request: PathBuf,

    /// JSON snapshot of the selected canvas node
    #[arg(short, long)]
    pub node: Option<PathBuf>,

    /// Category (overrides the request and config)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut request: GenerationRequest = read_json(&resolve(cwd, &args.request))?;
    apply_category(&mut request, args.category, &config);

    let node: Option<NodeStyleInfo> = args
        .node
        .as_ref()
        .map(|path| read_json(&resolve(cwd, path)))
        .transpose()?;

    debug!(
        component_name = %request.component_name,
        props = request.props.len(),
        has_node = node.is_some(),
        "Loaded generation request"
    );

    let files = storygen_generator::generate(&request, node.as_ref())?;

    if args.stdout {
        for (path, content) in files.iter() {
            println!("// {}", path);
            println!("{}", content);
            println!();
        }
        return Ok(());
    }

    let out_dir = match args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };

    println!("{}", "🔨 Generating component files...".bright_blue().bold());

    let written = write_files(&files, &out_dir)?;
    for path in &written {
        println!("  {} {}", "✓".green(), path.display());
    }

    println!();
    println!(
        "{} Generated {} files in {}",
        "✅".green(),
        written.len(),
        out_dir.display()
    );

    Ok(())
}

/// Write every file of the set below `out_dir`, creating folders as needed
pub fn write_files(files: &GeneratedFileSet, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for (relative_path, content) in files.iter() {
        let output_file = out_dir.join(relative_path);

        if let Some(parent) = output_file.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&output_file, content)
            .with_context(|| format!("Failed to write {}", output_file.display()))?;
        written.push(output_file);
    }

    Ok(written)
}

fn apply_category(request: &mut GenerationRequest, category: Option<String>, config: &Config) {
    if let Some(category) = category {
        request.category = category;
    } else if request.category.trim().is_empty() {
        if let Some(default_category) = &config.default_category {
            request.category = default_category.clone();
        }
    }
}

fn resolve(cwd: &str, path: &Path) -> PathBuf {
    PathBuf::from(cwd).join(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}
