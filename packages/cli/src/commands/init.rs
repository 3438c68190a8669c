use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagewright_builder::Theme;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for the persisted builder state
    #[arg(short, long, default_value = ".pagewright")]
    pub storage_dir: String,

    /// Directory exports are written to
    #[arg(short, long, default_value = ".")]
    pub export_dir: String,

    /// Initial theme (light, dark)
    #[arg(short, long)]
    pub theme: Option<Theme>,

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
        "📝 Initializing Pagewright project...".bright_blue().bold()
    );

    let config = Config {
        storage_dir: args.storage_dir.clone(),
        export_dir: args.export_dir.clone(),
        theme: args.theme,
    };

    let storage_dir = config.get_storage_dir(cwd);
    if !storage_dir.exists() {
        fs::create_dir_all(&storage_dir)?;
        println!("  {} Created {}/", "✓".green(), args.storage_dir);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagewright catalog");
    println!("  2. Run: pagewright add hero");
    println!("  3. Run: pagewright export \"My Website\"");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(
            InitArgs {
                storage_dir: "state".to_string(),
                export_dir: "out".to_string(),
                theme: Some(Theme::Dark),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.storage_dir, "state");
        assert_eq!(config.theme, Some(Theme::Dark));
        assert!(dir.path().join("state").is_dir());
    }
}
