// src/lib.rs

pub mod cli;
pub mod config;
pub mod curriculum;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod progress;
pub mod types;
pub mod view;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::config::model::CurriculumFile;
use crate::config::prerequisite_warnings;
use crate::curriculum::Curriculum;
use crate::engine::Controller;
use crate::progress::{FileStorage, MemoryStorage, ProgressStore, Storage};
use crate::types::StorageMode;
use crate::view::{Renderer, TextRenderer};

/// High-level entry point used by `main.rs`.
///
/// Loads the curriculum, opens progress storage, and runs one command
/// against a [`Controller`] rendering to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let curriculum_path = args.curriculum.clone();
    let cfg = load_and_validate(&curriculum_path)?;
    let command = args.command.clone().unwrap_or(Command::Show);

    if let Command::Check = command {
        print_check(&cfg);
        return Ok(());
    }

    let mode = if args.memory {
        StorageMode::Memory
    } else {
        cfg.storage.mode
    };
    let store = open_store(&cfg, mode, &curriculum_root_dir(&curriculum_path));
    let curriculum = Curriculum::from_config(&cfg);
    info!(courses = curriculum.len(), key = %store.key(), "curriculum loaded");

    let mut controller = Controller::new(curriculum, store, TextRenderer::stdout());

    match command {
        Command::Show | Command::Check => controller.start()?,
        Command::Click { ids } => {
            controller.start()?;
            for id in ids {
                controller.click(&id)?;
            }
        }
        Command::Reset => {
            controller.reset()?;
        }
        Command::Session => {
            controller.start()?;
            let stdin = std::io::stdin();
            run_session(&mut controller, stdin.lock())?;
        }
    }

    Ok(())
}

/// Build the progress store described by `[storage]`.
pub fn open_store(cfg: &CurriculumFile, mode: StorageMode, root: &Path) -> ProgressStore {
    let storage: Box<dyn Storage> = match mode {
        StorageMode::File => {
            let dir = root.join(&cfg.storage.dir);
            debug!(?dir, "using file storage");
            Box::new(FileStorage::new(dir))
        }
        StorageMode::Memory => {
            debug!("using memory storage");
            Box::new(MemoryStorage::new())
        }
    };
    ProgressStore::new(storage, cfg.storage.key.clone())
}

/// Drive a controller from line-oriented input until EOF or `quit`.
///
/// Each non-empty line is a course id to click, except the words `show`,
/// `reset`, `quit` and `exit`.
pub fn run_session<R: Renderer, I: BufRead>(
    controller: &mut Controller<R>,
    input: I,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        match word {
            "" => continue,
            "quit" | "exit" => break,
            "show" => controller.start()?,
            "reset" => {
                controller.reset()?;
            }
            id => {
                controller.click(id)?;
            }
        }
    }
    debug!("session finished");
    Ok(())
}

/// Figure out the directory storage paths are relative to.
///
/// - "configs/Malla.toml" → "configs"
/// - bare "Malla.toml" → current working directory
fn curriculum_root_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Print courses, prerequisites and prerequisite warnings.
fn print_check(cfg: &CurriculumFile) {
    let curriculum = Curriculum::from_config(cfg);

    println!("ramos check");
    println!("  storage.mode = {:?}", cfg.storage.mode);
    println!("  storage.dir = {}", cfg.storage.dir);
    println!("  storage.key = {}", cfg.storage.key);
    println!();

    println!("courses ({}):", curriculum.len());
    for course in curriculum.courses() {
        println!("  - {} ({})", course.id, course.name);
        if let Some(semester) = course.semester {
            println!("      semester: {semester}");
        }
        if !course.prerequisites.is_empty() {
            println!("      requires: {:?}", course.prerequisites);
        }
        let unlocks = curriculum.dependents_of(&course.id);
        if !unlocks.is_empty() {
            println!("      unlocks: {:?}", unlocks);
        }
    }

    let warnings = prerequisite_warnings(cfg);
    if !warnings.is_empty() {
        println!();
        println!("warnings ({}):", warnings.len());
        for warning in warnings {
            println!("  - {warning}");
        }
    }

    debug!("check complete (no storage touched)");
}
