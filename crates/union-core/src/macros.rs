//! Declarative expansion of the per-arity union types.
//!
//! The engine is written once, here; `unions.rs` stamps it out for arities
//! 1 through 8. Only the parts that genuinely vary with arity live in the
//! macro — storage, constructors, positional accessors, the dispatch
//! combinator family, and the wire codec impls. The guard layer, the error
//! taxonomy, and the envelope helpers are ordinary shared modules.
//!
//! Two macros:
//!
//! - `define_union!` — one invocation per arity; takes the type name, the
//!   arity, and a per-position row of identifiers (variant name, type
//!   parameter, 1-based index, and the method/generic names that position
//!   owns).
//! - `define_narrow!` — one invocation per (arity, position) pair;
//!   generates the remainder-narrowing method, with the position-to-position
//!   mapping into the arity-minus-one union spelled out explicitly rather
//!   than computed by token munging.
//!
//! Paths inside the expansions resolve at the invocation site, so `unions.rs`
//! imports everything the generated code names.

macro_rules! define_union {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal, [
            $( { $var:ident, $ty:ident, $idx:literal, $from:ident, $get:ident, $try_get:ident, $into:ident,
                 $f:ident, $F:ident, $Fut:ident, $R:ident, $P:ident } ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name<$($ty),+> {
            /// The tag-0 state. Only reachable through [`Default`]; no
            /// factory or conversion produces it.
            Uninit,
            $(
                #[doc = concat!("Active at position ", stringify!($idx), ".")]
                $var($ty),
            )+
        }

        impl<$($ty),+> Default for $name<$($ty),+> {
            fn default() -> Self {
                Self::Uninit
            }
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Number of declared variant positions.
            pub const ARITY: u8 = $arity;

            /// Discriminator of the active variant: 0 when uninitialized,
            /// the 1-based position otherwise.
            pub const fn tag(&self) -> u8 {
                match self {
                    Self::Uninit => 0,
                    $( Self::$var(_) => $idx, )+
                }
            }

            /// True unless this union is in the tag-0 state.
            pub const fn is_initialized(&self) -> bool {
                !matches!(self, Self::Uninit)
            }

            /// Type name of the active variant, for diagnostics.
            pub fn active_type_name(&self) -> &'static str {
                match self {
                    Self::Uninit => "uninitialized",
                    $( Self::$var(_) => type_name::<$ty>(), )+
                }
            }

            $(
                #[doc = concat!(
                    "Construct with position ", stringify!($idx),
                    " active. Direct; no runtime type test."
                )]
                pub fn $from(value: $ty) -> Self {
                    Self::$var(value)
                }
            )+

            /// Construct from a type-erased value, testing the declared
            /// variant types in order and taking the first match. Fails with
            /// `InvalidCast` when the runtime type matches no declared
            /// position.
            pub fn from_any(value: Box<dyn Any>) -> Result<Self, UnionError>
            where
                $($ty: Any),+
            {
                let mut value = value;
                $(
                    value = match value.downcast::<$ty>() {
                        Ok(v) => return Ok(Self::$var(*v)),
                        Err(v) => v,
                    };
                )+
                drop(value);
                Err(guard::no_matching_variant(&[$(type_name::<$ty>()),+]))
            }

            /// Non-failing counterpart of `from_any`.
            pub fn try_from_any(value: Box<dyn Any>) -> Option<Self>
            where
                $($ty: Any),+
            {
                Self::from_any(value).ok()
            }

            /// Parse a string against the declared types: one pass trying the
            /// input as raw JSON for each position in order (numbers,
            /// booleans, quoted strings, structured values), then a second
            /// pass with the bare input quoted as a JSON string. First
            /// success wins.
            pub fn try_parse(input: &str) -> Option<Self>
            where
                $($ty: DeserializeOwned),+
            {
                $(
                    if let Ok(v) = serde_json::from_str::<$ty>(input) {
                        return Some(Self::$var(v));
                    }
                )+
                $(
                    if let Ok(v) = serde_json::from_value::<$ty>(Value::String(input.to_owned())) {
                        return Some(Self::$var(v));
                    }
                )+
                None
            }

            /// True iff the active payload is a `T`. Tag-driven: no side
            /// effects, never fails, false on the uninitialized state.
            pub fn is<T: Any>(&self) -> bool
            where
                $($ty: Any),+
            {
                match self {
                    Self::Uninit => false,
                    $( Self::$var(v) => (v as &dyn Any).is::<T>(), )+
                }
            }

            /// Borrow the payload as a `T`, failing with `InvalidCast`
            /// whenever [`Self::is`] would be false.
            pub fn get<T: Any>(&self) -> Result<&T, UnionError>
            where
                $($ty: Any),+
            {
                match self {
                    Self::Uninit => Err(guard::cast_mismatch(type_name::<T>(), "uninitialized")),
                    $(
                        Self::$var(v) => (v as &dyn Any)
                            .downcast_ref::<T>()
                            .ok_or_else(|| guard::cast_mismatch(type_name::<T>(), type_name::<$ty>())),
                    )+
                }
            }

            /// Like [`Self::get`], but the uninitialized state yields
            /// `Ok(None)` instead of an error.
            pub fn get_nullable<T: Any>(&self) -> Result<Option<&T>, UnionError>
            where
                $($ty: Any),+
            {
                if let Self::Uninit = self {
                    return Ok(None);
                }
                self.get().map(Some)
            }

            /// The single O(1) type-erased view of the payload; `None` when
            /// uninitialized.
            pub fn payload(&self) -> Option<&dyn Any>
            where
                $($ty: Any),+
            {
                match self {
                    Self::Uninit => None,
                    $( Self::$var(v) => Some(v as &dyn Any), )+
                }
            }

            $(
                #[doc = concat!(
                    "Borrow the payload at position ", stringify!($idx),
                    ", failing with `InvalidState` when a different position (or none) is active."
                )]
                #[allow(unreachable_patterns)]
                pub fn $get(&self) -> Result<&$ty, UnionError> {
                    match self {
                        Self::$var(v) => Ok(v),
                        Self::Uninit => Err(guard::uninitialized(stringify!($get))),
                        other => Err(guard::wrong_variant(other.tag(), $idx, type_name::<$ty>())),
                    }
                }

                #[doc = concat!("Non-failing counterpart of `", stringify!($get), "`.")]
                pub fn $try_get(&self) -> Option<&$ty> {
                    match self {
                        Self::$var(v) => Some(v),
                        _ => None,
                    }
                }

                #[doc = concat!(
                    "Consume the union, returning the position-", stringify!($idx),
                    " payload or an `InvalidState` error."
                )]
                #[allow(unreachable_patterns)]
                pub fn $into(self) -> Result<$ty, UnionError> {
                    match self {
                        Self::$var(v) => Ok(v),
                        Self::Uninit => Err(guard::uninitialized(stringify!($into))),
                        other => Err(guard::wrong_variant(other.tag(), $idx, type_name::<$ty>())),
                    }
                }
            )+

            /// Total dispatch: exactly one handler runs, the one at the
            /// active tag. Fails with `InvalidOperation` on the uninitialized
            /// state.
            pub fn match_with<R>(self, $($f: impl FnOnce($ty) -> R),+) -> Result<R, UnionError> {
                match self {
                    Self::Uninit => Err(guard::uninitialized_dispatch("match_with")),
                    $( Self::$var(v) => Ok($f(v)), )+
                }
            }

            /// Partial dispatch: handlers are optional, and a missing handler
            /// for the active tag (or the uninitialized state) yields `None`
            /// instead of an error. One handler per declared position,
            /// selected strictly by tag.
            pub fn try_match<R, $($F),+>(self, $($f: Option<$F>),+) -> Option<R>
            where
                $($F: FnOnce($ty) -> R),+
            {
                match self {
                    Self::Uninit => None,
                    $( Self::$var(v) => $f.map(|handler| handler(v)), )+
                }
            }

            /// Value transformation over the active variant. Same dispatch as
            /// [`Self::match_with`], but fails with `InvalidState` on the
            /// uninitialized state.
            pub fn map<R>(self, $($f: impl FnOnce($ty) -> R),+) -> Result<R, UnionError> {
                match self {
                    Self::Uninit => Err(guard::uninitialized("map")),
                    $( Self::$var(v) => Ok($f(v)), )+
                }
            }

            /// Transform each position into its own result type, producing a
            /// union of the result types with the same tag. The uninitialized
            /// state maps to the uninitialized result union.
            pub fn map_union<$($R),+>(self, $($f: impl FnOnce($ty) -> $R),+) -> $name<$($R),+> {
                match self {
                    Self::Uninit => $name::Uninit,
                    $( Self::$var(v) => $name::$var($f(v)), )+
                }
            }

            /// Alias for [`Self::map_union`].
            pub fn map_any<$($R),+>(self, $($f: impl FnOnce($ty) -> $R),+) -> $name<$($R),+> {
                self.map_union($($f),+)
            }

            /// Async counterpart of [`Self::map`]: handlers return futures
            /// and only the future selected by the tag is awaited.
            pub async fn map_async<R, $($Fut),+>(
                self,
                $($f: impl FnOnce($ty) -> $Fut),+
            ) -> Result<R, UnionError>
            where
                $($Fut: Future<Output = R>),+
            {
                match self {
                    Self::Uninit => Err(guard::uninitialized("map_async")),
                    $( Self::$var(v) => Ok($f(v).await), )+
                }
            }

            /// Never-failing [`Self::map`]: the uninitialized state yields
            /// the supplied default.
            pub fn map_or_default<R>(self, default: R, $($f: impl FnOnce($ty) -> R),+) -> R {
                match self {
                    Self::Uninit => default,
                    $( Self::$var(v) => $f(v), )+
                }
            }

            /// The crate's one general-purpose exception boundary: runs
            /// [`Self::map`] and funnels every failure — the union's own
            /// errors and any panic raised by the selected handler — into
            /// `on_error`.
            pub fn map_safe<R>(
                self,
                $($f: impl FnOnce($ty) -> R,)+
                on_error: impl FnOnce(UnionError) -> R,
            ) -> R {
                let tag = self.tag();
                match catch_unwind(AssertUnwindSafe(|| self.map($($f),+))) {
                    Ok(Ok(value)) => value,
                    Ok(Err(err)) => on_error(err),
                    Err(payload) => on_error(guard::handler_panicked(tag, payload)),
                }
            }

            /// Predicate-gated [`Self::map`]: each position pairs a predicate
            /// with a handler, and a rejected value (or the uninitialized
            /// state) falls back to the supplied default.
            pub fn map_where<R, $($P, $F,)+>(
                self,
                $($f: ($P, $F),)+
                default: R,
            ) -> R
            where
                $(
                    $P: FnOnce(&$ty) -> bool,
                    $F: FnOnce($ty) -> R,
                )+
            {
                match self {
                    Self::Uninit => default,
                    $(
                        Self::$var(v) => {
                            let (accepts, transform) = $f;
                            if accepts(&v) { transform(v) } else { default }
                        }
                    )+
                }
            }

            /// Like [`Self::map`], but handlers also receive the whole union,
            /// not just the unwrapped payload.
            pub fn map_with_context<R>(
                &self,
                $($f: impl FnOnce(&Self, &$ty) -> R),+
            ) -> Result<R, UnionError> {
                match self {
                    Self::Uninit => Err(guard::uninitialized("map_with_context")),
                    $( Self::$var(v) => Ok($f(self, v)), )+
                }
            }

            /// Dispatch over the type-erased payload, ignoring which position
            /// is active. Fails with `InvalidState` when there is no payload.
            pub fn map_value<R>(&self, f: impl FnOnce(&dyn Any) -> R) -> Result<R, UnionError>
            where
                $($ty: Any),+
            {
                match self.payload() {
                    Some(value) => Ok(f(value)),
                    None => Err(guard::uninitialized("map_value")),
                }
            }

            /// See [`Self::map`]. The `select` names are an alias family kept
            /// for call-site readability; contracts are identical.
            pub fn select<R>(self, $($f: impl FnOnce($ty) -> R),+) -> Result<R, UnionError> {
                self.map($($f),+)
            }

            /// See [`Self::map_or_default`].
            pub fn select_or_default<R>(self, default: R, $($f: impl FnOnce($ty) -> R),+) -> R {
                self.map_or_default(default, $($f),+)
            }

            /// See [`Self::try_match`].
            pub fn try_select<R, $($F),+>(self, $($f: Option<$F>),+) -> Option<R>
            where
                $($F: FnOnce($ty) -> R),+
            {
                self.try_match($($f),+)
            }

            /// See [`Self::map_with_context`].
            pub fn select_with_context<R>(
                &self,
                $($f: impl FnOnce(&Self, &$ty) -> R),+
            ) -> Result<R, UnionError> {
                self.map_with_context($($f),+)
            }

            /// See [`Self::map_async`].
            pub async fn select_async<R, $($Fut),+>(
                self,
                $($f: impl FnOnce($ty) -> $Fut),+
            ) -> Result<R, UnionError>
            where
                $($Fut: Future<Output = R>),+
            {
                self.map_async($($f),+).await
            }

            /// Async dispatch that never fails: the uninitialized state
            /// yields the supplied default instead of an error.
            pub async fn select_async_or_default<R, $($Fut),+>(
                self,
                default: R,
                $($f: impl FnOnce($ty) -> $Fut),+
            ) -> R
            where
                $($Fut: Future<Output = R>),+
            {
                match self {
                    Self::Uninit => default,
                    $( Self::$var(v) => $f(v).await, )+
                }
            }

            /// See [`Self::map_where`].
            pub fn select_where<R, $($P, $F,)+>(
                self,
                $($f: ($P, $F),)+
                default: R,
            ) -> R
            where
                $(
                    $P: FnOnce(&$ty) -> bool,
                    $F: FnOnce($ty) -> R,
                )+
            {
                self.map_where($($f,)+ default)
            }

            /// Side-effecting dispatch: one action per position, and exactly
            /// the action at the active tag runs. Fails with `InvalidState`
            /// on the uninitialized state.
            pub fn switch(self, $($f: impl FnOnce($ty)),+) -> Result<(), UnionError> {
                match self {
                    Self::Uninit => Err(guard::uninitialized("switch")),
                    $( Self::$var(v) => { $f(v); Ok(()) } )+
                }
            }

            /// Async counterpart of [`Self::switch`].
            pub async fn switch_async<$($Fut),+>(
                self,
                $($f: impl FnOnce($ty) -> $Fut),+
            ) -> Result<(), UnionError>
            where
                $($Fut: Future<Output = ()>),+
            {
                match self {
                    Self::Uninit => Err(guard::uninitialized("switch_async")),
                    $( Self::$var(v) => { $f(v).await; Ok(()) } )+
                }
            }

            /// Never-failing [`Self::switch`]: the uninitialized state
            /// invokes the no-argument fallback instead.
            pub fn switch_or_default(self, $($f: impl FnOnce($ty),)+ fallback: impl FnOnce()) {
                match self {
                    Self::Uninit => fallback(),
                    $( Self::$var(v) => $f(v), )+
                }
            }

            /// Positional destructuring: `Some` at the active position,
            /// `None` everywhere else (and everywhere, for the uninitialized
            /// state).
            pub fn deconstruct(self) -> ($(Option<$ty>,)+) {
                let mut slot = Some(self);
                let parts = ($(
                    match slot.take() {
                        Some(Self::$var(v)) => Some(v),
                        other => {
                            slot = other;
                            None
                        }
                    },
                )+);
                drop(slot);
                parts
            }
        }

        impl<$($ty),+> fmt::Display for $name<$($ty),+>
        where
            $($ty: fmt::Display),+
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Uninit => f.write_str("uninitialized"),
                    $( Self::$var(v) => fmt::Display::fmt(v, f), )+
                }
            }
        }

        impl<$($ty),+> Serialize for $name<$($ty),+>
        where
            $($ty: Serialize),+
        {
            /// Write the `{type, value}` envelope: a match over positions,
            /// each arm emitting its literal 1-based index and the payload
            /// via its own codec. Tag 0 has no wire form.
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match self {
                    Self::Uninit => Err(serde::ser::Error::custom(concat!(
                        "cannot encode an uninitialized ",
                        stringify!($name)
                    ))),
                    $(
                        Self::$var(v) => {
                            let mut state = serializer.serialize_struct(stringify!($name), 2)?;
                            state.serialize_field("type", &($idx as u8))?;
                            state.serialize_field("value", v)?;
                            state.end()
                        }
                    )+
                }
            }
        }

        impl<'de, $($ty),+> Deserialize<'de> for $name<$($ty),+>
        where
            $($ty: DeserializeOwned),+
        {
            /// Read the `{type, value}` envelope, validate the discriminator
            /// against this arity, then decode the raw value fragment with
            /// the selected position's own codec.
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = Envelope::deserialize(deserializer)?;
                match raw.tag {
                    $(
                        $idx => serde_json::from_value::<$ty>(raw.value)
                            .map(Self::$var)
                            .map_err(|e| serde::de::Error::custom(crate::envelope::bad_payload(
                                $idx,
                                type_name::<$ty>(),
                                &e,
                            ))),
                    )+
                    other => Err(serde::de::Error::custom(crate::envelope::bad_discriminator(
                        other, $arity,
                    ))),
                }
            }
        }
    };
}

macro_rules! define_narrow {
    (
        $name:ident < $($g:ident),+ >, $method:ident, $var:ident, $ty:ident, $pos:literal,
        $rem:ident < $($rg:ident),+ >, [ $($from:ident => $to:ident),* ]
    ) => {
        impl<$($g),+> $name<$($g),+> {
            #[doc = concat!(
                "Extract the position-", stringify!($pos), " payload, or narrow to the ",
                "remainder union over the other declared types so the caller can re-dispatch ",
                "without re-testing. The uninitialized state narrows to the uninitialized ",
                "remainder."
            )]
            pub fn $method(self) -> Result<$ty, $rem<$($rg),+>> {
                match self {
                    Self::$var(v) => Ok(v),
                    $( Self::$from(v) => Err($rem::$to(v)), )*
                    Self::Uninit => Err($rem::Uninit),
                }
            }
        }
    };
}

pub(crate) use define_narrow;
pub(crate) use define_union;
