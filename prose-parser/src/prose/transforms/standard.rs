//! Pre-built transform definitions.
//!
//! Common pipelines as static references using `once_cell::sync::Lazy`.
//! The CLI and the loader both start from [`STRING_TO_DOCUMENT`] and chain
//! further stages from [`stages`](super::stages) as needed.

use crate::prose::ast::Document;
use crate::prose::transforms::stages::Construction;
use crate::prose::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for document-producing transforms.
pub type BuildTransform = Transform<String, Document>;

/// Type alias for document-to-document transforms.
pub type DocumentTransform = Transform<Document, Document>;

/// String → Document construction transform.
///
/// Splits the source into lines and builds one paragraph per line. This is
/// the first stage of any prose pipeline.
pub static STRING_TO_DOCUMENT: Lazy<BuildTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Construction::new()));
