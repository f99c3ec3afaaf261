use zenfield::{run_viewer, Scenario, VisualizerConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Env var holding the remote vision service credential
const CREDENTIAL_VAR: &str = "ZENFIELD_API_KEY";

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_preset_from_yaml() -> Result<VisualizerConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("presets")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let cfg: VisualizerConfig = serde_yaml::from_reader(reader)?;

    Ok(cfg)
}

fn main() -> Result<()> {
    let cfg = load_preset_from_yaml()?;

    // Missing credential degrades to pointer-only mode, never a crash
    let credential = std::env::var(CREDENTIAL_VAR).ok();
    if credential.is_none() {
        println!("{CREDENTIAL_VAR} not set: camera interaction disabled, move the mouse up/down");
    }

    let scenario = Scenario::build_scenario(cfg, credential);
    run_viewer(scenario);

    // Kernel timing tables instead of the viewer: swap these in and run
    // with --release
    //zenfield::bench_advance();
    //zenfield::bench_sampler();

    Ok(())
}
