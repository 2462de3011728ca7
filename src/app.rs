//! One export run, from parsed arguments to the exit code.

use std::io::Write;

use crate::api::GraphApi;
use crate::cli::Args;
use crate::config::{validate_config, Config};
use crate::error::{exit_codes, Result};
use crate::export::collect_document;
use crate::fs::save_document;
use crate::output::{failure_note, print_run_summary, Console};

/// Run an export and return the process exit code.
///
/// Every message goes to `console`; errors are reported there too before
/// their exit code is returned.
pub async fn run<W: Write>(args: Args, console: &mut Console<W>) -> i32 {
    match export(args, console).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            console.error(&e.to_string());
            e.exit_code()
        }
    }
}

/// Load the config file if present, then apply CLI and environment overrides.
pub fn load_config<W: Write>(args: Args, console: &mut Console<W>) -> Result<Config> {
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        console.warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        console.info("Using default configuration with CLI arguments");
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;
    Ok(config)
}

async fn export<W: Write>(args: Args, console: &mut Console<W>) -> Result<()> {
    console.banner();

    let config = load_config(args, console)?;

    let output_path = config.options.output_path.clone();
    console.config_summary(
        config.media_owner(),
        &config.options.fetch_mode.to_string(),
        config.options.limit,
        &output_path.display().to_string(),
    );

    let api = GraphApi::from_config(&config)?;

    console.info("Waiting for Data to be fetched");
    let (document, mut summary) = collect_document(&api, &config).await?;

    if let Some(note) = failure_note(&summary) {
        console.warning(&note);
    }

    console.info("Saving the details in the file");
    tracing::info!(
        "Writing {} media items to {}",
        document.item_count(),
        output_path.display()
    );
    save_document(&document, &output_path).await?;
    summary.output_path = Some(output_path);

    console.success("Results saved");
    if config.options.show_progress {
        print_run_summary(console, &summary);
    }
    console.info("Thank You for using the software");

    Ok(())
}
