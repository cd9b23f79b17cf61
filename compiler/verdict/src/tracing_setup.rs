//! Subscriber installation for the CLI.
//!
//! Library crates only emit events; this is the one place a subscriber is
//! installed. Set `VERDICT_LOG` to an `EnvFilter` directive
//! (`VERDICT_LOG=verdict_eval=trace`) to enable output, and
//! `VERDICT_LOG_TREE=1` for indented span trees.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

const LOG_ENV: &str = "VERDICT_LOG";
const TREE_ENV: &str = "VERDICT_LOG_TREE";

/// Install the subscriber if `VERDICT_LOG` is set. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV);
        let tree = std::env::var(TREE_ENV).is_ok_and(|v| v == "1");

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        if let Err(err) = installed {
            eprintln!("warning: could not install log subscriber: {err}");
        }
    });
}
