use std::path::Path;
use std::process;

use catmap::atlas::default_atlas;
use catmap::output;
use catmap::render::render_to_html;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output path, relative to the working directory; overwritten on every run.
const OUTPUT_PATH: &str = "test.html";

fn main() {
    setup_logging();

    let diagram = default_atlas();
    debug!("atlas:\n{}", diagram);

    if let Err(e) = render_to_html(&diagram, Path::new(OUTPUT_PATH)) {
        output::error(&e);
        process::exit(1);
    }
    output::action("Saved", &format!("interactive 3D map to {}", OUTPUT_PATH));
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();
}
