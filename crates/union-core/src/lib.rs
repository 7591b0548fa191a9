//! # union-core
//!
//! Immutable, arity-parametric **tagged-union value containers**: each
//! `UnionN` holds exactly one value out of a fixed, ordered list of N
//! declared types (N = 1..8), with safe runtime narrowing, pattern-style
//! dispatch combinators, structural equality, and a canonical
//! `{"type": <1..N>, "value": <json>}` wire envelope.
//!
//! Unions are plain Rust enums with inline payload storage; a dedicated
//! `Uninit` state (tag 0) is reachable only through `Default`. All values are
//! immutable after construction — narrowing returns new values or errors,
//! never mutates — so they can be shared across threads freely.
//!
//! ## Quick start
//!
//! ```rust
//! use union_core::{to_json, Union3};
//!
//! let u: Union3<i64, String, bool> = Union3::from1(42);
//! assert_eq!(u.tag(), 1);
//! assert!(u.is::<i64>());
//! assert_eq!(to_json(&u).unwrap(), r#"{"type":1,"value":42}"#);
//!
//! let label = u
//!     .match_with(|n| format!("int {n}"), |s| s, |b| format!("bool {b}"))
//!     .unwrap();
//! assert_eq!(label, "int 42");
//! ```
//!
//! ## Modules
//!
//! - [`unions`] — the `Union1`..`Union8` types with their accessor protocol
//!   and dispatch combinators
//! - [`envelope`] — the shared `{type, value}` wire envelope and the
//!   string-level [`to_json`]/[`from_json`] entry points
//! - [`error`] — the closed, arity-independent error taxonomy
//!
//! ## Failure vocabulary
//!
//! Guarded narrowing fails with `InvalidState`, runtime type assertions with
//! `InvalidCast`, total dispatch on an uninitialized union with
//! `InvalidOperation`, and wire-format violations with `Decode` — the same
//! four kinds at every arity. The soft APIs (`try_*`, `*_or_default`,
//! `map_safe`) are the only places failures are absorbed, and their names say
//! so.

pub mod envelope;
pub mod error;
mod guard;
mod macros;
pub mod unions;

pub use envelope::{from_json, to_json, Envelope};
pub use error::{Result, UnionError};
pub use unions::{Union1, Union2, Union3, Union4, Union5, Union6, Union7, Union8};
