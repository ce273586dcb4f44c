//! Transform pipeline infrastructure.
//!
//! A composable, type-safe transformation system. Any transform can be
//! chained with another if their types are compatible, so processing
//! stages stay modular and reusable across the CLI, tests, and library
//! code.
//!
//! The system consists of three pieces:
//!
//! 1. The [`Runnable`] trait — the interface implemented by individual
//!    stages (construction, case folding, the strip filters).
//! 2. The [`Transform<I, O>`] type — a wrapper enabling composition via
//!    `.then()`, with the compiler enforcing that output types match input
//!    types at each stage.
//! 3. Pre-built pipelines in [`standard`], exposed as static references
//!    using `once_cell::sync::Lazy`.
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Construction::new())   // String → Document
//!     .then(Lowercase::new());     // Document → Document
//! let document = pipeline.run(source)?;
//! ```

pub mod stages;
pub mod standard;

use std::fmt;

/// Error that can occur during transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Generic error with message
    Error(String),
    /// Stage failed with specific error
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input to an output.
///
/// Implemented by individual stages; the [`Transform`] struct composes
/// multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input.
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from type `I` to type `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage onto this transform.
    ///
    /// The compiler ensures that the stage's input type matches this
    /// transform's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built transform onto this transform.
    ///
    /// The referenced transform must have a static lifetime (typically one
    /// of the `Lazy` statics in [`standard`]).
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input.
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
