use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use create_pwa::config::{read_config, resolve_settings};
use create_pwa::models::Overrides;
use create_pwa::{create, logger, ImageResizer};
use log::{error, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate PWA icons, launch screens, manifest and service worker", long_about = None)]
struct Args {
    /// Source image for the icon set, relative to --dir (default icon.png
    /// when present). An empty value (--icon=) skips the icons.
    // String rather than PathBuf: clap's path parser refuses empty values.
    #[arg(long)]
    icon: Option<String>,
    /// Source image for the launch screens, relative to --dir (default
    /// launch.png when present). An empty value (--launch=) skips them.
    #[arg(long)]
    launch: Option<String>,
    /// Directory to scaffold into (default: current directory).
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Resize filter: nearest, triangle, catmullrom, gaussian, lanczos3.
    #[arg(long)]
    filter: Option<String>,
    /// More output; repeat for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Also append log lines to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            icon: self.icon.as_ref().map(PathBuf::from),
            launch: self.launch.as_ref().map(PathBuf::from),
            filter: self.filter.clone(),
            verbose: self.verbose,
            log_file: self.log_file.clone(),
        }
    }
}

fn run(args: Args) -> create_pwa::Result<()> {
    let dir = match &args.dir {
        Some(d) => d.clone(),
        None => std::env::current_dir().map_err(create_pwa::CreateError::io("."))?,
    };
    let settings = resolve_settings(read_config(&dir)?, args.overrides());

    if let Err(e) = logger::init(settings.log_level, settings.log_file.clone()) {
        eprintln!("logger already initialised: {}", e);
    }
    for w in &settings.warnings {
        warn!("{}", w);
    }

    let created = create(&dir, &settings.options, &ImageResizer { filter: settings.filter })?;
    log::info!("{} files written for '{}'", created.files.len(), created.app_name);
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if !log::log_enabled!(log::Level::Error) {
                eprintln!("error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_flags_are_accepted() {
        let args = Args::try_parse_from(["create-pwa", "--launch=", "--icon", ""]).unwrap();
        let o = args.overrides();
        assert_eq!(o.launch, Some(PathBuf::new()));
        assert_eq!(o.icon, Some(PathBuf::new()));
    }

    #[test]
    fn flags_map_onto_overrides() {
        let args = Args::try_parse_from([
            "create-pwa", "--icon", "art/icon.png", "--filter", "nearest", "-vv", "--log-file", "pwa.log",
        ])
        .unwrap();
        let o = args.overrides();
        assert_eq!(o.icon, Some(PathBuf::from("art/icon.png")));
        assert_eq!(o.launch, None);
        assert_eq!(o.filter.as_deref(), Some("nearest"));
        assert_eq!(o.verbose, 2);
        assert_eq!(o.log_file, Some(PathBuf::from("pwa.log")));
    }
}
