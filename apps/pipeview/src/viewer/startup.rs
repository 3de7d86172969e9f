use super::types::ResolverChoice;
use super::types::ViewerApp;
use eframe::egui;
use pv_core::PipeResolver;
use pv_registry::RegistryLookup;
use pv_uri::PipeUriTranslator;
use std::path::PathBuf;

const WINDOW_TITLE: &str = "PipeView";
const REGISTRY_DIR: &str = ".pipeview";
const REGISTRY_FILE: &str = "registry.json";

pub(crate) fn run() -> Result<(), eframe::Error> {
    init_logging();

    let choice = match resolver_choice_from_args() {
        Ok(choice) => choice,
        Err(error) => {
            eprintln!("PipeView startup error: {error}");
            return Ok(());
        }
    };

    let resolver = build_resolver(choice);
    tracing::info!("starting with the `{}` resolver", choice.label());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(resolver)))),
    )
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,pv_registry=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .try_init();
}

fn resolver_choice_from_args() -> Result<ResolverChoice, String> {
    resolver_choice_from(std::env::args().skip(1))
}

pub(crate) fn resolver_choice_from(
    mut args: impl Iterator<Item = String>,
) -> Result<ResolverChoice, String> {
    while let Some(arg) = args.next() {
        if arg != "--resolver" {
            continue;
        }

        let name = args
            .next()
            .ok_or_else(|| "missing resolver name after --resolver".to_owned())?;
        return ResolverChoice::from_name(name.as_str()).ok_or_else(|| {
            format!("unsupported resolver `{name}` (expected: registry|pipe-uri)")
        });
    }

    Ok(ResolverChoice::Registry)
}

pub(crate) fn build_resolver(choice: ResolverChoice) -> Box<dyn PipeResolver> {
    match choice {
        ResolverChoice::Registry => Box::new(RegistryLookup::new(default_registry_path())),
        ResolverChoice::PipeUri => Box::new(PipeUriTranslator::default()),
    }
}

/// Fixed per-user location of the registry file. Applied only here at the
/// shell boundary; everything below takes the path as a parameter.
pub(crate) fn default_registry_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(REGISTRY_DIR)
        .join(REGISTRY_FILE)
}
