/// A container holding either a present value or nothing at all.
///
/// `Optional` is a closed two-variant sum: once constructed, an instance
/// never changes variant, and transformations always build a new container
/// instead of mutating in place. Extracting the payload without checking the
/// variant first is a programmer error; [`value`](Optional::value) makes that
/// error loud instead of recoverable. [`match_with`](Optional::match_with) is
/// the eliminator to reach for when both variants need handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// The absence of a value.
    None,
}

impl<T> Optional<T> {
    /// Returns `true` if a value is present.
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Moves the contained value out.
    ///
    /// # Panics
    ///
    /// Panics if the optional is [`None`](Optional::None). The panic signals
    /// a logic defect at the call site, not an expected control-flow path,
    /// and is not meant to be caught; check the variant first or use
    /// [`match_with`](Optional::match_with).
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!(
                "InvalidOptionalUnwrap: tried to unwrap Optional as Some, but Optional was None"
            ),
        }
    }

    /// Consumes the optional, invoking exactly one of the given branches.
    ///
    /// This is the only way to consume the payload without risking the
    /// unwrap panic.
    pub fn match_with<R, S, N>(self, if_some: S, if_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => if_some(value),
            Self::None => if_none(),
        }
    }

    /// Maps the contained value, leaving a [`None`](Optional::None) untouched.
    ///
    /// The mapper is not invoked on the `None` path.
    pub fn map_value<NT, F>(self, mapper: F) -> Optional<NT>
    where
        F: FnOnce(T) -> NT,
    {
        match self {
            Self::Some(value) => Optional::Some(mapper(value)),
            Self::None => Optional::None,
        }
    }

    /// Monadic version of [`map_value`](Optional::map_value): the mapper
    /// returns an optional itself, and one level of nesting is flattened.
    pub fn flat_map<NT, F>(self, mapper: F) -> Optional<NT>
    where
        F: FnOnce(T) -> Optional<NT>,
    {
        match self {
            Self::Some(value) => mapper(value),
            Self::None => Optional::None,
        }
    }

    /// Reinterprets a `None` as an optional of any other payload type.
    ///
    /// This is an escape hatch for call sites that have already proven the
    /// payload type irrelevant, typically when returning an absent lookup
    /// through a function with a different payload type:
    ///
    /// ```
    /// use vessel::optional::Optional;
    ///
    /// fn inner() -> Optional<u32> {
    ///     Optional::None
    /// }
    ///
    /// fn outer() -> Optional<String> {
    ///     let found = inner();
    ///     if found.is_none() {
    ///         // No payload exists, so the container can be re-typed freely.
    ///         return found.transform();
    ///     }
    ///     Optional::Some(found.value().to_string())
    /// }
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the optional is [`Some`](Optional::Some); a present payload
    /// cannot be reinterpreted, so misuse aborts with the same unwrap
    /// convention as [`value`](Optional::value).
    #[track_caller]
    pub fn transform<NT>(self) -> Optional<NT> {
        match self {
            Self::Some(_) => panic!(
                "InvalidOptionalUnwrap: tried to transform a Some, but only a None can be re-typed"
            ),
            Self::None => Optional::None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Optional;
    use proptest::prelude::*;

    #[test]
    fn some_holds_its_value() {
        let optional = Optional::Some(5);

        assert!(optional.is_some());
        assert!(!optional.is_none());
        assert_eq!(optional.value(), 5);
    }

    #[test]
    fn none_holds_nothing() {
        let optional = Optional::<i32>::None;

        assert!(!optional.is_some());
        assert!(optional.is_none());
    }

    #[test]
    #[should_panic(expected = "InvalidOptionalUnwrap")]
    fn unwrapping_a_none_aborts() {
        Optional::<i32>::None.value();
    }

    #[test]
    fn match_with_invokes_exactly_one_branch() {
        let described = Optional::Some(7).match_with(|n| format!("got {}", n), || String::from("nothing"));
        assert_eq!(described, "got 7");

        let described = Optional::<i32>::None.match_with(|n| format!("got {}", n), || String::from("nothing"));
        assert_eq!(described, "nothing");
    }

    #[test]
    fn map_value_doubles_the_payload() {
        assert_eq!(Optional::Some(5).map_value(|n| n * 2).value(), 10);
    }

    #[test]
    fn map_value_skips_the_mapper_on_none() {
        let mut invoked = false;

        let mapped = Optional::<i32>::None.map_value(|n| {
            invoked = true;
            n * 2
        });

        assert!(mapped.is_none());
        assert!(!invoked);
    }

    #[test]
    fn flat_map_flattens_one_level() {
        let chained = Optional::Some(4).flat_map(|n| Optional::Some(n + 1));
        assert_eq!(chained, Optional::Some(5));

        let severed = Optional::Some(4).flat_map(|_| Optional::<i32>::None);
        assert!(severed.is_none());
    }

    #[test]
    fn flat_map_on_none_stays_none() {
        assert!(Optional::<i32>::None.flat_map(|n| Optional::Some(n + 1)).is_none());
    }

    #[test]
    fn transform_retypes_a_none() {
        let retyped: Optional<String> = Optional::<u32>::None.transform();
        assert!(retyped.is_none());
    }

    #[test]
    #[should_panic(expected = "InvalidOptionalUnwrap")]
    fn transform_on_a_some_aborts() {
        let _: Optional<String> = Optional::Some(1).transform();
    }

    #[test]
    fn converts_from_and_into_std_option() {
        assert_eq!(Optional::from(Some(3)), Optional::Some(3));
        assert_eq!(Optional::from(None::<i32>), Optional::None);
        assert_eq!(Option::from(Optional::Some(3)), Some(3));
        assert_eq!(Option::<i32>::from(Optional::<i32>::None), None);
    }

    proptest! {
        #[test]
        fn functor_composition(v in any::<i64>()) {
            let f = |n: i64| n.wrapping_mul(3);
            let g = |n: i64| n.wrapping_sub(7);

            prop_assert_eq!(
                Optional::Some(v).map_value(f).map_value(g),
                Optional::Some(v).map_value(|n| g(f(n)))
            );
        }

        #[test]
        fn monad_left_identity(v in any::<i32>()) {
            let f = |n: i32| if n % 2 == 0 { Optional::Some(n / 2) } else { Optional::None };

            prop_assert_eq!(Optional::Some(v).flat_map(f), f(v));
        }

        #[test]
        fn monad_right_identity(v in proptest::option::of(any::<u8>())) {
            let optional = Optional::from(v);

            prop_assert_eq!(optional.flat_map(Optional::Some), optional);
        }

        #[test]
        fn monad_associativity(v in proptest::option::of(any::<i32>())) {
            let f = |n: i32| if n != 0 { Optional::Some(n / 2) } else { Optional::None };
            let g = |n: i32| if n >= 0 { Optional::Some(n + 1) } else { Optional::None };
            let optional = Optional::from(v);

            prop_assert_eq!(
                optional.flat_map(f).flat_map(g),
                optional.flat_map(|n| f(n).flat_map(g))
            );
        }
    }
}
