//! Domain models for the named-object taxonomy.

mod category;
mod object;

pub use category::Category;
pub use object::{
    Iri, NamedObject, OwlAnnotationProperty, OwlClass, OwlDataProperty, OwlDatatype,
    OwlNamedIndividual, OwlObjectProperty, OwlOntology,
};
