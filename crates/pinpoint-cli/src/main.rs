//! Pinpoint - prints numbered context windows around keyword occurrences
//! in a fixed set of source files.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Allow for tests"
    )
)]

use std::io::{Write as _, stderr, stdout};

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

mod report;
mod searches;

fn main() -> Result<()> {
    init_tracing();

    let plan = searches::default_plan();
    let out = stdout();
    let mut handle = out.lock();
    report::render(&plan, report::CONTEXT_RADIUS, &mut handle)?;
    handle.flush()?;

    Ok(())
}

/// Routes diagnostics to stderr so stdout stays clean for the report.
fn init_tracing() {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pinpoint_core=info,pinpoint_cli=info".into()))
        .with(
            fmt::layer()
                .with_writer(stderr)
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();
}
