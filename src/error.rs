//! Taxonomy error types.

use std::any::TypeId;

use thiserror::Error;

use crate::models::Category;

/// Contract violations in the named-object taxonomy.
///
/// Neither variant is recoverable at this layer: both indicate a caller
/// stepping outside the closed domain, not a transient condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("Type descriptor matches no known named-object kind: {type_id:?}")]
    UnrecognizedType { type_id: TypeId },

    #[error("Not a mintable entity kind: {category}")]
    UnsupportedCategory { category: Category },
}
