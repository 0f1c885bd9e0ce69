//! Error types for the Arbor core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

/// Generates a stable error-code enum for an error type.
///
/// Each error variant maps to exactly one code variant and one
/// `SCREAMING_SNAKE_CASE` string. Downstream crates reuse the macro so every
/// error surface in the workspace reports codes the same way.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while building a spanning forest or querying a
/// [`crate::DisjointSet`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ForestError {
    /// A node was queried that is not part of the disjoint-set universe.
    ///
    /// This usually means an edge references a node missing from an explicit
    /// node list.
    #[error("element {element} is not part of the disjoint set")]
    UnknownElement {
        /// Debug rendering of the offending node.
        element: Arc<str>,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Debug rendering of the edge's first endpoint.
        left: Arc<str>,
        /// Debug rendering of the edge's second endpoint.
        right: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
}

impl ForestError {
    pub(crate) fn unknown_element(element: &impl fmt::Debug) -> Self {
        Self::UnknownElement {
            element: Arc::from(format!("{element:?}")),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// A node was queried that is not part of the disjoint-set universe.
        UnknownElement => UnknownElement { .. } => "FOREST_UNKNOWN_ELEMENT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "FOREST_NON_FINITE_WEIGHT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
