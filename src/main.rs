use std::path::Path;
use std::process;

use leed_report::cli::Args;
use leed_report::config::{discover_config, load_config_from_path, Settings};
use leed_report::prelude::*;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let settings = Settings::resolve(args, config)?;

    // Create adapters (Dependency Injection)
    let run_service = PollinationRunService::new(&settings.api_base, settings.api_key.as_deref())?;
    let bundle_repository = FileSystemBundleCache::new(settings.cache_dir.clone());
    let model_merger = VtkJsSceneWriter::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = FetchBundleUseCase::new(
        run_service,
        bundle_repository,
        model_merger,
        progress_reporter,
    );

    let request = FetchRequest::new(
        settings.run_url.clone(),
        settings.display_mode,
        settings.refresh,
    );
    let response = use_case.execute(request).await?;

    // Render the report
    let view = ReportView::from_response(&response);
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted = formatter.format(&view)?;

    let presenter: Box<dyn OutputPresenter> = match settings.output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted)?;

    if settings.strict && view.credit.badge == CreditBadge::Fail {
        return Ok(ExitCode::CreditsBelowTarget);
    }

    Ok(ExitCode::Success)
}
