#![doc = include_str!("../README.md")]

pub mod deferred;
pub mod matcher;
pub mod optional;
pub mod query;
pub mod result;

/// Useful exports to get started quickly
pub mod prelude {
    pub use crate::{
        deferred::{Deferred, DeferredHandle},
        matcher::{match_equal, HandlerFn, MatchArm, Pattern},
        optional::Optional,
        query::{Element, ElementSource, Registry, Selector, SelectorError},
        result::Result,
    };
    pub use async_trait::async_trait;
}
