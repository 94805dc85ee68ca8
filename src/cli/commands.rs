use crate::cli::args::{Cli, Commands};
use crate::config::ProcessingSettings;
use crate::error::Result;
use crate::processors::GridProcessor;
use crate::utils::filename::{derive_output_path, OutputPaths};
use crate::utils::progress::ProgressReporter;
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    let settings = ProcessingSettings::load(cli.config.as_deref())?;
    debug!(?settings, "Settings loaded");

    let processor = GridProcessor::new(settings);

    match cli.command {
        Commands::Reconstruct {
            input,
            ocean,
            output,
        } => {
            let output = output.unwrap_or_else(|| derive_output_path(&input, "", None));
            info!("Input: {}", input.display());
            info!("Ocean mask: {}", ocean.display());

            let progress = ProgressReporter::new_spinner("Reconstructing grids...", cli.quiet);
            let report = processor.reconstruct(&input, &ocean, &output, Some(&progress))?;

            progress.println(&report.summary());
            println!("Values written to {}", output.display());
        }

        Commands::Statistics {
            input,
            ocean,
            output_dir,
        } => {
            let outputs = OutputPaths::for_input(&input, output_dir.as_deref());
            info!("Input: {}", input.display());
            info!("Ocean mask: {}", ocean.display());

            let progress =
                ProgressReporter::new_spinner("Computing change statistics...", cli.quiet);
            let report =
                processor.compute_statistics(&input, &ocean, &outputs, Some(&progress))?;

            progress.println(&report.summary());
            println!("Values written to {}", outputs.values.display());
            println!("Mean written to {}", outputs.mean.display());
            println!("Standard deviation written to {}", outputs.stdev.display());
        }

        Commands::Validate { input, json } => {
            let progress =
                ProgressReporter::new_spinner("Validating sample stream...", cli.quiet || json);
            let report = processor.validate(&input, Some(&progress))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                progress.println(&report.summary());
                println!("Sample stream is in raster order");
            }
        }
    }

    Ok(())
}
