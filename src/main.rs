use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use postsync::config::read_config;
use postsync::logger::configure_logger;
use postsync::remote::GithubSource;
use postsync::sync::run_sync;

const CFG_FILE_NAME: &str = "postsync.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn get_config_path() -> Option<PathBuf> {
    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if exe_dir.join(CFG_FILE_NAME).exists() {
                return Some(exe_dir.join(CFG_FILE_NAME));
            }
        }
    }

    if let Ok(cur_dir) = env::current_dir() {
        if cur_dir.join(CFG_FILE_NAME).exists() {
            return Some(cur_dir.join(CFG_FILE_NAME));
        }
    }

    None
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.config_path.map(PathBuf::from).or_else(get_config_path) {
        Some(path) => path,
        None => {
            eprintln!("Could not find {} configuration", CFG_FILE_NAME);
            eprintln!("Please run postsync --help");
            return Ok(());
        }
    };

    let config = match read_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run postsync --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting post sync =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");

    let source = GithubSource::new(&config.source);
    run_sync(&config, &source);

    Ok(())
}
