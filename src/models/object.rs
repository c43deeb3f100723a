//! Concrete named-object types and the closed union over them.

use std::any::TypeId;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::Category;

/// An IRI identifying a named object.
///
/// Treated as an opaque key; no syntactic validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Creates an IRI from any string-like value.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the IRI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(iri)
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self(iri.to_string())
    }
}

/// Declares one wrapper struct per named-object kind, the `NamedObject`
/// union over them, and the dynamic-type index used for reflective
/// classification.
macro_rules! named_object_kinds {
    ($( $(#[$meta:meta])* $kind:ident => $variant:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $kind {
                iri: Iri,
            }

            impl $kind {
                /// The category tag for this kind.
                pub const CATEGORY: Category = Category::$variant;

                /// Creates a new object with the given IRI.
                pub fn new(iri: impl Into<Iri>) -> Self {
                    Self { iri: iri.into() }
                }

                /// Returns the object's IRI.
                pub fn iri(&self) -> &Iri {
                    &self.iri
                }
            }

            impl From<$kind> for NamedObject {
                fn from(object: $kind) -> Self {
                    NamedObject::$variant(object)
                }
            }
        )+

        /// A named object of any kind.
        ///
        /// The union is closed: every object an ontology model can hand
        /// out is one of these variants, so classification is a single
        /// exhaustive match.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum NamedObject {
            $( $variant($kind), )+
        }

        impl NamedObject {
            /// Returns the category tag for this object's kind.
            pub fn category(&self) -> Category {
                match self {
                    $( NamedObject::$variant(_) => Category::$variant, )+
                }
            }

            /// Returns the object's IRI.
            pub fn iri(&self) -> &Iri {
                match self {
                    $( NamedObject::$variant(object) => object.iri(), )+
                }
            }
        }

        /// Maps the `TypeId` of each concrete kind to its category.
        pub(crate) static TYPE_INDEX: Lazy<HashMap<TypeId, Category>> = Lazy::new(|| {
            HashMap::from([
                $( (TypeId::of::<$kind>(), $kind::CATEGORY), )+
            ])
        });
    };
}

named_object_kinds! {
    /// A named class.
    OwlClass => Class,
    /// A property relating two individuals.
    OwlObjectProperty => ObjectProperty,
    /// A property relating an individual to a literal value.
    OwlDataProperty => DataProperty,
    /// A property carrying annotations.
    OwlAnnotationProperty => AnnotationProperty,
    /// A named individual.
    OwlNamedIndividual => Individual,
    /// A named datatype.
    OwlDatatype => Datatype,
    /// An ontology, addressed by its ontology IRI.
    OwlOntology => Ontology,
}
