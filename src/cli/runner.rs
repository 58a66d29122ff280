use tracing::info;
use tracing_subscriber::EnvFilter;

use iconcrop::{CropParams, crop_smart_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // stdout is reserved for the diagnostic line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the preset file, then explicit flags.
pub fn resolve_params(args: &CliArgs) -> Result<CropParams, AppError> {
    let mut params = match &args.params {
        Some(path) => CropParams::from_json_file(path).map_err(|source| AppError::Preset {
            path: path.clone(),
            source,
        })?,
        None => CropParams::default(),
    };

    if let Some(size) = args.size {
        params.size = size;
    }
    if let Some(tolerance) = args.tolerance {
        params.tolerance = tolerance;
    }
    if let Some(margin_ratio) = args.margin_ratio {
        params.margin_ratio = margin_ratio;
    }
    if let Some(estimator) = args.estimator {
        params.estimator = estimator;
    }
    if let Some(square_mode) = args.square_mode {
        params.square_mode = square_mode;
    }
    if let Some(fallback_mode) = args.fallback_mode {
        params.fallback_mode = fallback_mode;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    info!("Parameters: {:?}", params);

    let outcome = crop_smart_with_params(&args.source, &args.destination, &params)?;
    println!("{outcome}");
    info!(
        "Successfully processed: {:?} ({}x{}) -> {:?} ({}x{})",
        args.source,
        outcome.source_size.0,
        outcome.source_size.1,
        outcome.destination,
        outcome.output_size.0,
        outcome.output_size.1
    );

    Ok(())
}
