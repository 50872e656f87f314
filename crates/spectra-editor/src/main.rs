//! Spectra command line entry point
//!
//! Lists the saves of a mode, or loads one into a headless scene and prints
//! what it contains.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use spectra_core::{PrefabFactory, RestoreOptions, Scene, restore};
use spectra_editor::ConfigManager;
use spectra_editor::persistence::{SaveError, SaveManager, read_document};

/// Inspect Spectra scene saves
#[derive(Parser, Debug)]
#[command(name = "spectra")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List or inspect Spectra scene saves", long_about = None)]
struct Cli {
    /// Session mode (subdirectory under saves/); defaults to the configured mode
    #[arg(long)]
    mode: Option<String>,

    /// Save root directory; defaults to the configured root
    #[arg(long)]
    root: Option<PathBuf>,

    /// Read prism rotations the way older builds wrote them
    #[arg(long)]
    legacy_prism_rotation: bool,

    /// Save key or path to a document JSON file; lists saves when omitted
    target: Option<String>,
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spectra_editor=debug,spectra_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConfigManager::new();
    let mut saves = config.config().saves.clone();
    if let Some(mode) = args.mode.clone() {
        saves.mode = mode;
    }
    if let Some(root) = args.root.clone() {
        saves.root = Some(root);
    }
    let manager = SaveManager::from_config(&saves, None);

    let result = match &args.target {
        None => list(&manager),
        Some(target) => show(&manager, target, args.legacy_prism_rotation),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn list(manager: &SaveManager) -> Result<(), SaveError> {
    let entries = manager.list_saves()?;
    if entries.is_empty() {
        println!("No saves in {}", manager.mode_dir().display());
    }
    for entry in entries {
        println!("{}\t{}", entry.key, entry.document_path.display());
    }
    Ok(())
}

fn show(manager: &SaveManager, target: &str, legacy_prism_rotation: bool) -> Result<(), SaveError> {
    let path = Path::new(target);
    let document = if path.extension().is_some_and(|ext| ext == "json") {
        read_document(path)?
    } else {
        manager.load(target)?
    };

    let mut scene = Scene::new();
    let options = RestoreOptions {
        legacy_prism_rotation,
    };
    let restored = restore(&document, &mut scene, &mut PrefabFactory, options)?;

    for id in &restored.spawned {
        let Some(entity) = scene.get(*id) else {
            continue;
        };
        let kind = entity.kind().map_or("background", |k| k.name());
        let p = entity.transform.position;
        println!("{kind:<8} {:<16} ({:.3}, {:.3}, {:.3})", entity.name, p.x, p.y, p.z);
    }

    let camera = restored.camera;
    println!(
        "camera   position ({:.3}, {:.3}, {:.3}) rotation {:?}",
        camera.position.x, camera.position.y, camera.position.z, camera.rotation
    );
    Ok(())
}
