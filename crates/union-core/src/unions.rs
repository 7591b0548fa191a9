//! The concrete union types, arities 1 through 8.
//!
//! Each `define_union!` invocation stamps out one arity: the enum, its
//! constructors and factories, the accessor protocol, the full dispatch
//! combinator family, and the `{type, value}` wire codec. The
//! `define_narrow!` invocations below them wire every position of every
//! arity to its remainder union (arity minus one, same declared order).
//!
//! Extending the family to a new arity is a matter of adding one
//! `define_union!` row set and its narrow table here.

use std::any::{type_name, Any};
use std::fmt;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::UnionError;
use crate::guard;
use crate::macros::{define_narrow, define_union};

define_union! {
    /// A union of one declared type — the degenerate arity. Exists as the
    /// remainder target of [`Union2`] narrowing and for uniformity with the
    /// rest of the family.
    Union1, 1, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
    ]
}

define_union! {
    /// A union holding exactly one value out of two declared types.
    Union2, 2, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
    ]
}

define_union! {
    /// A union holding exactly one value out of three declared types.
    Union3, 3, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
        { V3, T3, 3, from3, get3, try_get3, into3, f3, F3, Fut3, R3, P3 },
    ]
}

define_union! {
    /// A union holding exactly one value out of four declared types.
    Union4, 4, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
        { V3, T3, 3, from3, get3, try_get3, into3, f3, F3, Fut3, R3, P3 },
        { V4, T4, 4, from4, get4, try_get4, into4, f4, F4, Fut4, R4, P4 },
    ]
}

define_union! {
    /// A union holding exactly one value out of five declared types.
    Union5, 5, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
        { V3, T3, 3, from3, get3, try_get3, into3, f3, F3, Fut3, R3, P3 },
        { V4, T4, 4, from4, get4, try_get4, into4, f4, F4, Fut4, R4, P4 },
        { V5, T5, 5, from5, get5, try_get5, into5, f5, F5, Fut5, R5, P5 },
    ]
}

define_union! {
    /// A union holding exactly one value out of six declared types.
    Union6, 6, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
        { V3, T3, 3, from3, get3, try_get3, into3, f3, F3, Fut3, R3, P3 },
        { V4, T4, 4, from4, get4, try_get4, into4, f4, F4, Fut4, R4, P4 },
        { V5, T5, 5, from5, get5, try_get5, into5, f5, F5, Fut5, R5, P5 },
        { V6, T6, 6, from6, get6, try_get6, into6, f6, F6, Fut6, R6, P6 },
    ]
}

define_union! {
    /// A union holding exactly one value out of seven declared types.
    Union7, 7, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
        { V3, T3, 3, from3, get3, try_get3, into3, f3, F3, Fut3, R3, P3 },
        { V4, T4, 4, from4, get4, try_get4, into4, f4, F4, Fut4, R4, P4 },
        { V5, T5, 5, from5, get5, try_get5, into5, f5, F5, Fut5, R5, P5 },
        { V6, T6, 6, from6, get6, try_get6, into6, f6, F6, Fut6, R6, P6 },
        { V7, T7, 7, from7, get7, try_get7, into7, f7, F7, Fut7, R7, P7 },
    ]
}

define_union! {
    /// A union holding exactly one value out of eight declared types — the
    /// largest generated arity.
    Union8, 8, [
        { V1, T1, 1, from1, get1, try_get1, into1, f1, F1, Fut1, R1, P1 },
        { V2, T2, 2, from2, get2, try_get2, into2, f2, F2, Fut2, R2, P2 },
        { V3, T3, 3, from3, get3, try_get3, into3, f3, F3, Fut3, R3, P3 },
        { V4, T4, 4, from4, get4, try_get4, into4, f4, F4, Fut4, R4, P4 },
        { V5, T5, 5, from5, get5, try_get5, into5, f5, F5, Fut5, R5, P5 },
        { V6, T6, 6, from6, get6, try_get6, into6, f6, F6, Fut6, R6, P6 },
        { V7, T7, 7, from7, get7, try_get7, into7, f7, F7, Fut7, R7, P7 },
        { V8, T8, 8, from8, get8, try_get8, into8, f8, F8, Fut8, R8, P8 },
    ]
}

/// The one arity where Rust coherence permits a blanket conversion.
impl<T1> From<T1> for Union1<T1> {
    fn from(value: T1) -> Self {
        Union1::from1(value)
    }
}

// Remainder tables. For `narrow_i` on an arity-N union, positions before `i`
// keep their index in the remainder and positions after `i` shift down one.

define_narrow!(Union2<T1, T2>, narrow1, V1, T1, 1, Union1<T2>, [V2 => V1]);
define_narrow!(Union2<T1, T2>, narrow2, V2, T2, 2, Union1<T1>, [V1 => V1]);

define_narrow!(Union3<T1, T2, T3>, narrow1, V1, T1, 1, Union2<T2, T3>, [V2 => V1, V3 => V2]);
define_narrow!(Union3<T1, T2, T3>, narrow2, V2, T2, 2, Union2<T1, T3>, [V1 => V1, V3 => V2]);
define_narrow!(Union3<T1, T2, T3>, narrow3, V3, T3, 3, Union2<T1, T2>, [V1 => V1, V2 => V2]);

define_narrow!(Union4<T1, T2, T3, T4>, narrow1, V1, T1, 1, Union3<T2, T3, T4>,
    [V2 => V1, V3 => V2, V4 => V3]);
define_narrow!(Union4<T1, T2, T3, T4>, narrow2, V2, T2, 2, Union3<T1, T3, T4>,
    [V1 => V1, V3 => V2, V4 => V3]);
define_narrow!(Union4<T1, T2, T3, T4>, narrow3, V3, T3, 3, Union3<T1, T2, T4>,
    [V1 => V1, V2 => V2, V4 => V3]);
define_narrow!(Union4<T1, T2, T3, T4>, narrow4, V4, T4, 4, Union3<T1, T2, T3>,
    [V1 => V1, V2 => V2, V3 => V3]);

define_narrow!(Union5<T1, T2, T3, T4, T5>, narrow1, V1, T1, 1, Union4<T2, T3, T4, T5>,
    [V2 => V1, V3 => V2, V4 => V3, V5 => V4]);
define_narrow!(Union5<T1, T2, T3, T4, T5>, narrow2, V2, T2, 2, Union4<T1, T3, T4, T5>,
    [V1 => V1, V3 => V2, V4 => V3, V5 => V4]);
define_narrow!(Union5<T1, T2, T3, T4, T5>, narrow3, V3, T3, 3, Union4<T1, T2, T4, T5>,
    [V1 => V1, V2 => V2, V4 => V3, V5 => V4]);
define_narrow!(Union5<T1, T2, T3, T4, T5>, narrow4, V4, T4, 4, Union4<T1, T2, T3, T5>,
    [V1 => V1, V2 => V2, V3 => V3, V5 => V4]);
define_narrow!(Union5<T1, T2, T3, T4, T5>, narrow5, V5, T5, 5, Union4<T1, T2, T3, T4>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4]);

define_narrow!(Union6<T1, T2, T3, T4, T5, T6>, narrow1, V1, T1, 1, Union5<T2, T3, T4, T5, T6>,
    [V2 => V1, V3 => V2, V4 => V3, V5 => V4, V6 => V5]);
define_narrow!(Union6<T1, T2, T3, T4, T5, T6>, narrow2, V2, T2, 2, Union5<T1, T3, T4, T5, T6>,
    [V1 => V1, V3 => V2, V4 => V3, V5 => V4, V6 => V5]);
define_narrow!(Union6<T1, T2, T3, T4, T5, T6>, narrow3, V3, T3, 3, Union5<T1, T2, T4, T5, T6>,
    [V1 => V1, V2 => V2, V4 => V3, V5 => V4, V6 => V5]);
define_narrow!(Union6<T1, T2, T3, T4, T5, T6>, narrow4, V4, T4, 4, Union5<T1, T2, T3, T5, T6>,
    [V1 => V1, V2 => V2, V3 => V3, V5 => V4, V6 => V5]);
define_narrow!(Union6<T1, T2, T3, T4, T5, T6>, narrow5, V5, T5, 5, Union5<T1, T2, T3, T4, T6>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V6 => V5]);
define_narrow!(Union6<T1, T2, T3, T4, T5, T6>, narrow6, V6, T6, 6, Union5<T1, T2, T3, T4, T5>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V5 => V5]);

define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow1, V1, T1, 1,
    Union6<T2, T3, T4, T5, T6, T7>,
    [V2 => V1, V3 => V2, V4 => V3, V5 => V4, V6 => V5, V7 => V6]);
define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow2, V2, T2, 2,
    Union6<T1, T3, T4, T5, T6, T7>,
    [V1 => V1, V3 => V2, V4 => V3, V5 => V4, V6 => V5, V7 => V6]);
define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow3, V3, T3, 3,
    Union6<T1, T2, T4, T5, T6, T7>,
    [V1 => V1, V2 => V2, V4 => V3, V5 => V4, V6 => V5, V7 => V6]);
define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow4, V4, T4, 4,
    Union6<T1, T2, T3, T5, T6, T7>,
    [V1 => V1, V2 => V2, V3 => V3, V5 => V4, V6 => V5, V7 => V6]);
define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow5, V5, T5, 5,
    Union6<T1, T2, T3, T4, T6, T7>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V6 => V5, V7 => V6]);
define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow6, V6, T6, 6,
    Union6<T1, T2, T3, T4, T5, T7>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V5 => V5, V7 => V6]);
define_narrow!(Union7<T1, T2, T3, T4, T5, T6, T7>, narrow7, V7, T7, 7,
    Union6<T1, T2, T3, T4, T5, T6>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V5 => V5, V6 => V6]);

define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow1, V1, T1, 1,
    Union7<T2, T3, T4, T5, T6, T7, T8>,
    [V2 => V1, V3 => V2, V4 => V3, V5 => V4, V6 => V5, V7 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow2, V2, T2, 2,
    Union7<T1, T3, T4, T5, T6, T7, T8>,
    [V1 => V1, V3 => V2, V4 => V3, V5 => V4, V6 => V5, V7 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow3, V3, T3, 3,
    Union7<T1, T2, T4, T5, T6, T7, T8>,
    [V1 => V1, V2 => V2, V4 => V3, V5 => V4, V6 => V5, V7 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow4, V4, T4, 4,
    Union7<T1, T2, T3, T5, T6, T7, T8>,
    [V1 => V1, V2 => V2, V3 => V3, V5 => V4, V6 => V5, V7 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow5, V5, T5, 5,
    Union7<T1, T2, T3, T4, T6, T7, T8>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V6 => V5, V7 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow6, V6, T6, 6,
    Union7<T1, T2, T3, T4, T5, T7, T8>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V5 => V5, V7 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow7, V7, T7, 7,
    Union7<T1, T2, T3, T4, T5, T6, T8>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V5 => V5, V6 => V6, V8 => V7]);
define_narrow!(Union8<T1, T2, T3, T4, T5, T6, T7, T8>, narrow8, V8, T8, 8,
    Union7<T1, T2, T3, T4, T5, T6, T7>,
    [V1 => V1, V2 => V2, V3 => V3, V4 => V4, V5 => V5, V6 => V6, V7 => V7]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_cover_every_position() {
        assert_eq!(Union2::<i32, bool>::default().tag(), 0);
        assert_eq!(Union2::<i32, bool>::from1(1).tag(), 1);
        assert_eq!(Union2::<i32, bool>::from2(true).tag(), 2);
        assert_eq!(Union8::<u8, u8, u8, u8, u8, u8, u8, u8>::from8(0).tag(), 8);
        assert_eq!(Union8::<u8, u8, u8, u8, u8, u8, u8, u8>::ARITY, 8);
    }

    #[test]
    fn narrow_shifts_later_positions_down() {
        let u: Union4<i8, i16, i32, i64> = Union4::from4(4);
        let rem: Union3<i8, i16, i64> = u.narrow3().unwrap_err();
        assert_eq!(rem.tag(), 3);
        assert_eq!(rem.try_get3(), Some(&4));
    }

    #[test]
    fn narrow_keeps_earlier_positions_in_place() {
        let u: Union4<i8, i16, i32, i64> = Union4::from2(2);
        let rem: Union3<i8, i16, i64> = u.narrow3().unwrap_err();
        assert_eq!(rem.tag(), 2);
        assert_eq!(rem.try_get2(), Some(&2));
    }

    #[test]
    fn union1_from_is_position_one() {
        let u: Union1<String> = "x".to_string().into();
        assert_eq!(u.tag(), 1);
    }
}
