//! RC sections example - column 300x400 and beam 300x600
//!
//! Usage: `rc-sections [input.json]`
//!
//! Without an input file the bundled example is used. Scripts and plots are
//! written to `$RC_SECTIONS_OUT` (default `./out`). Set `OPENSEES_RUN=1` to
//! also run the Tcl script through OpenSees.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fiber_section::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => ModelInput::from_json_file(&path)
            .with_context(|| format!("failed to read model input {}", path))?,
        None => ModelInput::example(),
    };
    let out_dir = PathBuf::from(std::env::var("RC_SECTIONS_OUT").unwrap_or_else(|_| "out".to_string()));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    println!("=== RC Fiber Sections ===\n");

    let model = Model::from_input(&input).context("failed to build model")?;

    for format in [ScriptFormat::Tcl, ScriptFormat::Python] {
        let path = out_dir.join(format!("model.{}", format.extension()));
        fs::write(&path, model.to_script(format)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    let palette = Palette::default();
    let mut plotter = SvgPlotter::default();
    for desc in &input.sections {
        let section = model.section(desc.tag)?;
        let b = desc.boundaries();
        println!("\nSection {}: {} x {} m", section.tag, desc.depth, desc.width);
        println!("  core boundary: y = ±{:.4} m, z = ±{:.4} m", b.core_y, b.core_z);
        println!("  gross area:    {:.5} m²", section.gross_area());
        println!(
            "  steel area:    {:.6} m² (ρ = {:.3}%)",
            section.steel_area(),
            section.reinforcement_ratio() * 100.0
        );
        println!("  fibers:        {}", section.fiber_count());

        plotter.plot(section, &palette)?;
        let path = out_dir.join(format!("section_{}.svg", section.tag));
        plotter.save(&path)?;
        println!("  plot:          {}", path.display());
    }

    if std::env::var("OPENSEES_RUN").map(|v| v == "1").unwrap_or(false) {
        let runner = OpenSeesRunner::default();
        println!("\nRunning {} ...", runner.executable().display());
        let output = runner.run_model(&model)?;
        print!("{}", output.stdout);
    }

    println!("\n=== Done ===");
    Ok(())
}
