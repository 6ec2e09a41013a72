use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use create_pwa::icon::{placeholder_icon, placeholder_launch};

#[derive(Parser, Debug)]
#[command(about = "Write placeholder icon.png and launch.png", long_about = None)]
struct Args {
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.out).with_context(|| format!("create {}", args.out.display()))?;

    let icon = args.out.join("icon.png");
    placeholder_icon(1024).save(&icon).with_context(|| format!("save {}", icon.display()))?;
    println!("Wrote {}", icon.display());

    let launch = args.out.join("launch.png");
    placeholder_launch(2732, 2732).save(&launch).with_context(|| format!("save {}", launch.display()))?;
    println!("Wrote {}", launch.display());
    Ok(())
}
