use std::future::Future;

use crate::optional::Optional;

/// A container holding either a success value or a failure value.
///
/// `Result` is [`Optional`](crate::optional::Optional) with a second payload
/// arm: the same closed two-variant shape, the same immutability after
/// construction, and the same loud-unwrap contract, with every combinator
/// mirrored on the failure channel. The two type parameters are independent;
/// `E` does not have to be an error-like type.
///
/// The name deliberately shadows `std::result::Result` for code that imports
/// the crate [`prelude`](crate::prelude); absence and failure stay explicit
/// in such code because every fallible boundary speaks this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<T, E> {
    /// The success payload.
    Ok(T),
    /// The failure payload.
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Returns `true` if the result holds a success value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the result holds a failure value.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Moves the success value out.
    ///
    /// # Panics
    ///
    /// Panics if the result is [`Err`](Result::Err). Like the optional
    /// counterpart, this signals a logic defect and is not meant to be
    /// caught.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => {
                panic!("InvalidResultUnwrap: tried to unwrap Result as Ok, but Result was Err")
            }
        }
    }

    /// Moves the failure value out.
    ///
    /// # Panics
    ///
    /// Panics if the result is [`Ok`](Result::Ok).
    #[track_caller]
    pub fn error(self) -> E {
        match self {
            Self::Ok(_) => {
                panic!("InvalidResultUnwrap: tried to unwrap Result as Err, but Result was Ok")
            }
            Self::Err(error) => error,
        }
    }

    /// Consumes the result, invoking exactly one of the given branches.
    pub fn match_with<R, S, F>(self, if_ok: S, if_err: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => if_ok(value),
            Self::Err(error) => if_err(error),
        }
    }

    /// Maps the success value, passing an [`Err`](Result::Err) through
    /// untouched.
    pub fn map_value<NT, F>(self, mapper: F) -> Result<NT, E>
    where
        F: FnOnce(T) -> NT,
    {
        match self {
            Self::Ok(value) => Result::Ok(mapper(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Maps the failure value, passing an [`Ok`](Result::Ok) through
    /// untouched.
    pub fn map_error<NE, F>(self, mapper: F) -> Result<T, NE>
    where
        F: FnOnce(E) -> NE,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(mapper(error)),
        }
    }

    /// Monadic version of [`map_value`](Result::map_value); an
    /// [`Err`](Result::Err) short-circuits without invoking the mapper.
    pub fn flat_map<NT, F>(self, mapper: F) -> Result<NT, E>
    where
        F: FnOnce(T) -> Result<NT, E>,
    {
        match self {
            Self::Ok(value) => mapper(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Monadic version of [`map_error`](Result::map_error); an
    /// [`Ok`](Result::Ok) short-circuits without invoking the mapper.
    pub fn flat_map_error<NE, F>(self, mapper: F) -> Result<T, NE>
    where
        F: FnOnce(E) -> Result<T, NE>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => mapper(error),
        }
    }

    /// Chains the success value into a deferred computation.
    ///
    /// If the result is [`Ok`](Result::Ok), the mapper runs and its deferred
    /// result is awaited; if it is [`Err`](Result::Err), a deferred `Err`
    /// carrying the same error is produced immediately and the mapper is
    /// never invoked. Failure short-circuiting thereby composes across
    /// asynchronous boundaries without manual branching at every await
    /// point. The caller's task suspends cooperatively until the deferred
    /// computation completes; no timeout or retry policy is applied here.
    pub async fn flat_map_async<NT, F, Fut>(self, mapper: F) -> Result<NT, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<NT, E>>,
    {
        match self {
            Self::Ok(value) => mapper(value).await,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Reinterprets the success type of a proven-`Err` result.
    ///
    /// The escape-hatch counterpart of
    /// [`Optional::transform`](crate::optional::Optional::transform): after
    /// an [`is_err`](Result::is_err) check, the error can travel on through
    /// a function whose success type differs, since no success payload
    /// exists to carry.
    ///
    /// # Panics
    ///
    /// Panics if the result is [`Ok`](Result::Ok).
    #[track_caller]
    pub fn transform<NT>(self) -> Result<NT, E> {
        match self {
            Self::Ok(_) => panic!(
                "InvalidResultUnwrap: tried to transform an Ok, but only an Err can be re-typed"
            ),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Reinterprets the failure type of a proven-`Ok` result; the dual of
    /// [`transform`](Result::transform).
    ///
    /// # Panics
    ///
    /// Panics if the result is [`Err`](Result::Err).
    #[track_caller]
    pub fn transform_error<NE>(self) -> Result<T, NE> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => panic!(
                "InvalidResultUnwrap: tried to transform_error an Err, but only an Ok can be re-typed"
            ),
        }
    }

    /// Projects the success channel into an [`Optional`], discarding any
    /// error.
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Err(_) => Optional::None,
        }
    }

    /// Projects the failure channel into an [`Optional`], discarding any
    /// success value.
    pub fn err(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::None,
            Self::Err(error) => Optional::Some(error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}
