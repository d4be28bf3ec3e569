use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use hilbertviz::{SceneConfig, scenes};

#[derive(Parser, Debug)]
#[command(name = "hilbertviz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog scenes with their scripted durations.
    List,
    /// Write one scene's script as JSON.
    Dump(DumpArgs),
    /// Build and validate every scene in the catalog.
    Check,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Catalog name of the scene.
    #[arg(long)]
    scene: String,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = SceneConfig::lecture_default();
    match cli.cmd {
        Command::List => cmd_list(&cfg),
        Command::Dump(args) => cmd_dump(&cfg, args),
        Command::Check => cmd_check(&cfg),
    }
}

fn cmd_list(cfg: &SceneConfig) -> anyhow::Result<()> {
    for name in scenes::SCENE_NAMES {
        let scene = scenes::scene_by_name(cfg, name)
            .with_context(|| format!("build scene '{name}'"))?;
        println!(
            "{name:32} {:>7.1}s  {:3} objects  {:3} steps",
            scene.duration_sec(),
            scene.objects.len(),
            scene.steps.len(),
        );
    }
    Ok(())
}

fn cmd_dump(cfg: &SceneConfig, args: DumpArgs) -> anyhow::Result<()> {
    let scene = scenes::scene_by_name(cfg, &args.scene)
        .with_context(|| format!("build scene '{}'", args.scene))?;

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(f), &scene)
                .with_context(|| "serialize scene JSON")?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let json =
                serde_json::to_string_pretty(&scene).with_context(|| "serialize scene JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_check(cfg: &SceneConfig) -> anyhow::Result<()> {
    let catalog = scenes::catalog(cfg).context("build catalog")?;
    let total: f64 = catalog.iter().map(|s| s.duration_sec()).sum();
    eprintln!(
        "{} scenes ok, {:.1}s of script",
        catalog.len(),
        total
    );
    Ok(())
}
