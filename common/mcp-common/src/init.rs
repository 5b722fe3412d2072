//! Logging setup for stdio MCP servers

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for an MCP server binary.
///
/// Output goes to stderr without ANSI colors; stdout belongs to the JSON-RPC
/// stream. `RUST_LOG` directives are honoured on top of a default of
/// `<crate_name>=info`. `LOG_FORMAT=json` switches to one JSON object per
/// line.
///
/// Can only be called once per process.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(format!("{}=info", crate_name).parse()?);

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    if json {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer).try_init()?;
    }

    Ok(())
}
