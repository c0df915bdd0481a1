//! pl2dist's main application entry point and orchestration logic.
//! Resolves the scaffold context, creates the output tree, runs the three
//! materialization passes, and finalizes the manifest and repository.

use log::debug;

use pl2dist::{
    cli::{get_args, Args},
    config::{env_flag, ScaffoldContext, DEBUG_ENV},
    deps::detect_discoverer,
    error::{default_error_handler, Result},
    manifest::write_manifest,
    processor::Processor,
    render::PlaceholderRenderer,
    tree::create_output_tree,
    vcs::initialize_repository,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if env_flag(DEBUG_ENV) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Selects the dependency discoverer for this host
/// 2. Resolves the scaffold context from the script path and environment
/// 3. Creates the output tree (aborts if it already exists)
/// 4. Copies override templates, writes built-ins, places the script
/// 5. Writes the MANIFEST and initializes the repository
fn run(args: Args) -> Result<()> {
    let discoverer = detect_discoverer();
    let context = ScaffoldContext::resolve(&args.script, &*discoverer)?;
    debug!(
        "scaffolding {} into {}",
        context.script_name,
        context.out_dir.display()
    );

    create_output_tree(&context)?;

    let renderer = PlaceholderRenderer::new();
    let processor = Processor::new(&renderer, &context);
    processor.copy_overrides()?;
    processor.write_builtins();
    processor.place_script()?;

    write_manifest(&context.out_dir)?;
    initialize_repository(&context);

    println!("Created {}.", context.out_dir.display());
    println!("Remember to push it to your source-control host.");
    Ok(())
}
