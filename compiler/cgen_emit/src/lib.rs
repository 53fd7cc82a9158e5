//! cgen Emit - Source Text from Syntax Trees
//!
//! Turns a `cgen_ir` tree into C-like source text.
//!
//! # Architecture
//!
//! ```text
//! cgen_ir::Node (built with cgen_ir::build)
//!        ↓
//!    Checker       (optional: collect structural problems)
//!        ↓
//!    CodeGen       (Visitor<Output = String>)
//!        ↓
//!     String
//! ```
//!
//! # Modules
//!
//! - [`codegen`]: the renderer
//! - [`check`]: the validator
//!
//! # Example
//!
//! ```
//! use cgen_ir::build::{call, literal, local};
//!
//! let text = cgen_emit::render(&call(local("foo"), [literal(1), literal(2)]));
//! assert_eq!(text, "foo(1,2)");
//! ```

pub mod check;
pub mod codegen;

pub use check::{check, CheckError, Checker};
pub use codegen::CodeGen;

use cgen_ir::Node;

/// Failure of [`render_checked`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("tree failed validation with {} error(s)", .0.len())]
    Invalid(Vec<CheckError>),
}

/// Render `root` with a fresh [`CodeGen`].
pub fn render(root: &Node) -> String {
    CodeGen::new().render(root)
}

/// Validate `root`, then render it.
///
/// Produces exactly the text [`render`] would when validation passes.
pub fn render_checked(root: &Node) -> Result<String, RenderError> {
    check(root).map_err(RenderError::Invalid)?;
    Ok(render(root))
}

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=cgen_emit=debug` for entry points or `=trace` for every node.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
