//! Command line interface.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use ripperkit_core::{ChangeEvent, SelectionSet};
use ripperkit_settings::{default_config_path, Config};

use crate::program_for;
use crate::replay::{run_replay, ReplayScript};

#[derive(Debug, Parser)]
#[command(
    name = "ripperkit",
    about = "Plan crosshair rip cuts on a panel and emit ShopBot programs",
    version = crate::LONG_VERSION
)]
pub struct Cli {
    /// Config file (.toml or .json). Defaults to the platform config path if it exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a program for a crosshair and a set of quadrant lines.
    Generate(GenerateArgs),

    /// Drive the crosshair controller from a JSON script of pointer events.
    Replay(ReplayArgs),

    /// Write a default config file.
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Crosshair X in panel units (panel centre when omitted)
    #[arg(long)]
    pub x: Option<f64>,

    /// Crosshair Y in panel units (panel centre when omitted)
    #[arg(long)]
    pub y: Option<f64>,

    /// Quadrant lines in selection order: 1 top, 2 left, 3 bottom, 4 right
    #[arg(long, value_delimiter = ',')]
    pub quads: Vec<u8>,

    /// Panel width, overriding the config
    #[arg(long)]
    pub width: Option<f64>,

    /// Panel height, overriding the config
    #[arg(long)]
    pub height: Option<f64>,

    /// Safe travel height, overriding the config
    #[arg(long)]
    pub safe_z: Option<f64>,

    /// Write the program here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Script file
    pub script: PathBuf,

    /// Write the program here instead of stdout. Change events still go to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the final overlay scene as JSON
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitConfigArgs {
    /// Destination (.toml or .json). Defaults to the platform config path.
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        Commands::Generate(args) => run_generate(args, load_config(config_path.as_deref())?),
        Commands::Replay(args) => run_replay_cmd(args, load_config(config_path.as_deref())?),
        Commands::InitConfig(args) => run_init_config(args),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        _ => Ok(Config::default()),
    }
}

fn run_generate(args: GenerateArgs, mut config: Config) -> Result<()> {
    if let Some(width) = args.width {
        config.panel.width = width;
    }
    if let Some(height) = args.height {
        config.panel.height = height;
    }
    if let Some(safe_z) = args.safe_z {
        config.toolpath.safe_z = safe_z;
    }

    let center = config.panel().center();
    let selection = SelectionSet::from_ids(&args.quads)?;
    let change = ChangeEvent {
        x: args.x.unwrap_or(center.x),
        y: args.y.unwrap_or(center.y),
        quads: selection.ids(),
    };

    let program = program_for(&change, &config)?;
    emit_program(&program, args.output.as_deref())
}

fn run_replay_cmd(args: ReplayArgs, config: Config) -> Result<()> {
    let json = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = ReplayScript::from_json(&json)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    let outcome = run_replay(&script, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for change in &outcome.changes {
        writeln!(out, "{}", change.to_json()?)?;
    }
    drop(out);

    if let Some(path) = args.overlay.as_deref() {
        let json = serde_json::to_string_pretty(&outcome.overlay)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Overlay written to {}", path.display());
    }

    emit_program(&outcome.program, args.output.as_deref())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => default_config_path()?,
    };
    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default().save_to_file(&path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}

fn emit_program(program: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, program)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Program written to {}", path.display());
        }
        None => println!("{}", program),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ripperkit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_generate() {
        let cli = parse(&["generate", "--quads", "1,3", "--x", "10.5", "--safe-z", "1"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.quads, vec![1, 3]);
                assert_eq!(args.x, Some(10.5));
                assert_eq!(args.y, None);
                assert_eq!(args.safe_z, Some(1.0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_config() {
        let cli = parse(&["init-config", "out.json", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::InitConfig(InitConfigArgs { force: true, .. })
        ));
    }

    #[test]
    fn test_generate_writes_program() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let output = dir.path().join("rip.sbp");
        Config::default().save_to_file(&config_path).unwrap();

        let cli = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "generate",
            "--quads",
            "2,4",
            "--y",
            "12",
            "--output",
            output.to_str().unwrap(),
        ]);
        run(cli).unwrap();

        let program = fs::read_to_string(&output).unwrap();
        assert!(program.contains("' Rip X"));
        assert!(program.contains("J2,0.00000,12.00000"));
        assert!(program.ends_with("END"));
    }

    #[test]
    fn test_generate_rejects_unknown_line() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        Config::default().save_to_file(&config_path).unwrap();

        let cli = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "generate",
            "--quads",
            "7",
        ]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_replay_writes_program() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let script = dir.path().join("session.json");
        let output = dir.path().join("rip.sbp");
        let overlay = dir.path().join("overlay.json");
        Config::default().save_to_file(&config_path).unwrap();
        fs::write(
            &script,
            r#"{"steps":[{"action":"set_selection","quads":[1,3]}]}"#,
        )
        .unwrap();

        let cli = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "replay",
            script.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--overlay",
            overlay.to_str().unwrap(),
        ]);
        run(cli).unwrap();

        let program = fs::read_to_string(&output).unwrap();
        assert!(program.contains("' Rip Y"));

        let scene: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&overlay).unwrap()).unwrap();
        let roles: Vec<&str> = scene["strokes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["guide", "guide", "selected", "selected"]);
        assert_eq!(scene["label"]["text"], "(48.00,24.00)");
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        run(parse(&["init-config", path.to_str().unwrap()])).unwrap();
        assert!(Config::load_from_file(&path).is_ok());

        assert!(run(parse(&["init-config", path.to_str().unwrap()])).is_err());
        run(parse(&["init-config", path.to_str().unwrap(), "--force"])).unwrap();
    }
}
