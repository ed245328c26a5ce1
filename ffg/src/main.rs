use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffg::config::FFGConfig;
use ffg::io;
use ffg::io::cli::Cli;
use ffg::io::layout_to_svg::layout_to_svg;
use ffg::io::output::FFGOutput;
use ffg::opt::budget::Budget;
use ffg::opt::multi_start::MultiStartOptimizer;
use log::{info, warn};
use sheetpack::io::{export, import};
use sheetpack::suggest::suggest_sheet;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFGConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    config.validate()?;

    info!("Successfully parsed FFGConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let ext_request = io::read_request(args.input_file.as_path())?;
    let instance = import(&ext_request)?;

    let budget = Budget::from_config(&config);
    let report = MultiStartOptimizer::new(&instance, config, budget).optimize();
    let result = &report.best;

    if !result.is_complete() {
        let suggestion = suggest_sheet(instance.items());
        warn!(
            "[MAIN] {} of {} designs did not fit on the sheet, a {} sheet ({} x {} mm) is suggested for this request",
            result.unplaced.len(),
            result.total_requested(),
            suggestion.name,
            suggestion.width,
            suggestion.height
        );
    }

    let title = ext_request
        .name
        .clone()
        .unwrap_or_else(|| input_file_stem.to_string());

    {
        let output = FFGOutput {
            solution: export(&instance, result),
            request: ext_request,
            trials: report.trials.clone(),
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(result, &instance, config.svg_draw_options, &title);

        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
