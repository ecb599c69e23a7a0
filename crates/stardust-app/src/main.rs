mod app_state;
mod cli;
mod frame_host;
mod loader;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use app_state::{HostEvent, StardustApp};
use loader::LibraryLoader;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so `[logging] level` can take effect.
    // The loader's own log lines are lost here; the outcome is re-logged below.
    let config_path = stardust_config::resolve_config_path(args.config.as_deref());
    let existed = config_path.as_ref().is_ok_and(|p| p.exists());
    let loaded = stardust_config::load_config(args.config.as_deref());
    let config = match &loaded {
        Ok(c) => c.clone(),
        Err(_) => stardust_config::schema::StardustConfig::default(),
    };

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    let directive: Directive = log_directive.parse().unwrap_or_else(|e| {
        eprintln!("Invalid log directive {log_directive:?} ({e}), using info");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Stardust v{} starting...", env!("CARGO_PKG_VERSION"));

    match (&config_path, args.config.is_some()) {
        (Ok(path), true) => tracing::info!("Using config override: {}", path.display()),
        (Ok(path), false) if existed => tracing::info!("Using config file: {}", path.display()),
        (Ok(path), false) if loaded.is_ok() => {
            tracing::info!("No config found, created default at {}", path.display())
        }
        (Ok(path), false) => tracing::info!("No config found at {}", path.display()),
        (Err(e), _) => tracing::warn!("Could not resolve config path: {e}"),
    }
    match loaded {
        Ok(_) => tracing::info!(
            "Config loaded ({} points, {} branches)",
            config.galaxy.count,
            config.galaxy.branches
        ),
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    if args.print_config {
        println!("{}", stardust_config::config_to_json(&config));
        return;
    }

    // Create event loop and run
    let event_loop = match EventLoop::<HostEvent>::with_user_event().build() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = StardustApp::new(config, args.seed, LibraryLoader::new())
        .with_event_proxy(event_loop.create_proxy());

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
}
