//! Guard layer — every fallible accessor funnels its failure through one of
//! these constructors, so the whole crate raises a single, uniform error
//! vocabulary regardless of arity.
//!
//! The recurring failure conditions are:
//!
//! - **Uninitialized**: a position-specific accessor or a dispatch combinator
//!   ran against the tag-0 state.
//! - **Wrong variant**: a positional accessor (`get_i`) ran while a different
//!   position is active.
//! - **Cast mismatch**: a generic accessor (`get::<T>`) asked for a type the
//!   active payload is not.
//! - **No matching variant**: `from_any` exhausted the declared type list.
//! - **Handler panic**: a dispatch handler panicked inside `map_safe`; the
//!   panic payload is folded into `InvalidState` so the caller-supplied error
//!   handler sees one failure type.
//!
//! Native enums make two of the original guard conditions unrepresentable:
//! a tag can never exceed the arity, and a set tag always has a payload of
//! the declared type. Those checks therefore do not exist at runtime.

use std::any::Any;

use crate::error::UnionError;

/// `op` needed an active variant but the union is uninitialized (tag 0).
pub(crate) fn uninitialized(op: &str) -> UnionError {
    UnionError::InvalidState {
        tag: 0,
        message: format!("{op} requires an active variant, but the union is uninitialized"),
    }
}

/// Like [`uninitialized`], but for total dispatch (`match_with`), which the
/// contract distinguishes as an `InvalidOperation`.
pub(crate) fn uninitialized_dispatch(op: &str) -> UnionError {
    UnionError::InvalidOperation(format!(
        "{op} requires an active variant, but the union is uninitialized"
    ))
}

/// A positional accessor asked for position `expected_pos` (`expected_ty`)
/// while `tag` is active.
pub(crate) fn wrong_variant(tag: u8, expected_pos: u8, expected_ty: &'static str) -> UnionError {
    UnionError::InvalidState {
        tag,
        message: format!(
            "position {expected_pos} ({expected_ty}) was requested, but position {tag} is active"
        ),
    }
}

/// `get::<T>()` asked for `requested` while the active payload is `actual`.
pub(crate) fn cast_mismatch(requested: &'static str, actual: &str) -> UnionError {
    UnionError::InvalidCast {
        requested: requested.to_owned(),
        actual: actual.to_owned(),
    }
}

/// `from_any` tried every declared variant type without a match.
pub(crate) fn no_matching_variant(declared: &[&'static str]) -> UnionError {
    UnionError::InvalidCast {
        requested: format!("one of [{}]", declared.join(", ")),
        actual: "a value of an undeclared type".to_owned(),
    }
}

/// A handler panicked under `map_safe`. The payload is downcast to a string
/// where possible so the message survives the unwind boundary.
pub(crate) fn handler_panicked(tag: u8, payload: Box<dyn Any + Send>) -> UnionError {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    };
    UnionError::InvalidState {
        tag,
        message: format!("dispatch handler panicked: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_reports_tag_zero() {
        let err = uninitialized("get1");
        match err {
            UnionError::InvalidState { tag, message } => {
                assert_eq!(tag, 0);
                assert!(message.contains("get1"));
            }
            other => panic!("expected InvalidState, got {other}"),
        }
    }

    #[test]
    fn wrong_variant_names_both_positions() {
        let err = wrong_variant(2, 1, "i64");
        let text = err.to_string();
        assert!(text.contains("position 1"));
        assert!(text.contains("position 2 is active"));
        assert!(text.contains("i64"));
    }

    #[test]
    fn no_matching_variant_lists_declared_types() {
        let err = no_matching_variant(&["i64", "alloc::string::String"]);
        assert!(err.to_string().contains("i64"));
        assert!(err.is_invalid_cast());
    }

    #[test]
    fn panic_payload_string_is_preserved() {
        let err = handler_panicked(3, Box::new("boom".to_string()));
        assert!(err.to_string().contains("boom"));
        assert!(err.to_string().contains("tag 3"));
    }
}
