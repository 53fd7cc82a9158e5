//! Stack growth for recursive tree walks.
//!
//! Rendering and validating a syntax tree recurse once per nesting level.
//! A generator that wraps a type in thousands of `PointerOf` layers, or
//! nests blocks deeply, would otherwise exhaust the native stack.
//!
//! Every visitor in the workspace routes child traversal through
//! [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn visit_pointer_of(&mut self, node: &PointerOf) -> String {
//!     let pointee = ensure_sufficient_stack(|| node.pointee.accept(self));
//!     pointee + "*"
//! }
//! ```
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
