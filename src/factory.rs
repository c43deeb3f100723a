//! Entity factory seam and the mint entry point.
//!
//! The taxonomy never stores entities itself; minting delegates to an
//! [`EntityFactory`], one creation method per entity kind. Ontology
//! stores provide their own implementation; [`ModelFactory`] produces
//! the plain model types for callers without a store.

use crate::error::TaxonomyError;
use crate::models::{
    Category, Iri, NamedObject, OwlAnnotationProperty, OwlClass, OwlDataProperty, OwlDatatype,
    OwlNamedIndividual, OwlObjectProperty,
};

/// Creates named entities from IRIs.
///
/// One method per entity kind; implementations decide where the entity
/// lives (in-memory, backed by a store, interned, ...). Only entity
/// kinds appear here - ontologies are containers, not mintable entities.
pub trait EntityFactory {
    /// Creates a class with the given IRI.
    fn make_class(&self, iri: Iri) -> OwlClass;

    /// Creates an object property with the given IRI.
    fn make_object_property(&self, iri: Iri) -> OwlObjectProperty;

    /// Creates a data property with the given IRI.
    fn make_data_property(&self, iri: Iri) -> OwlDataProperty;

    /// Creates an annotation property with the given IRI.
    fn make_annotation_property(&self, iri: Iri) -> OwlAnnotationProperty;

    /// Creates a named individual with the given IRI.
    fn make_named_individual(&self, iri: Iri) -> OwlNamedIndividual;

    /// Creates a datatype with the given IRI.
    fn make_datatype(&self, iri: Iri) -> OwlDatatype;
}

/// Factory producing the crate's own model types.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelFactory;

impl EntityFactory for ModelFactory {
    fn make_class(&self, iri: Iri) -> OwlClass {
        OwlClass::new(iri)
    }

    fn make_object_property(&self, iri: Iri) -> OwlObjectProperty {
        OwlObjectProperty::new(iri)
    }

    fn make_data_property(&self, iri: Iri) -> OwlDataProperty {
        OwlDataProperty::new(iri)
    }

    fn make_annotation_property(&self, iri: Iri) -> OwlAnnotationProperty {
        OwlAnnotationProperty::new(iri)
    }

    fn make_named_individual(&self, iri: Iri) -> OwlNamedIndividual {
        OwlNamedIndividual::new(iri)
    }

    fn make_datatype(&self, iri: Iri) -> OwlDatatype {
        OwlDatatype::new(iri)
    }
}

/// Mints a fresh named entity of the given category.
///
/// Dispatches to the matching factory method for the six entity kinds.
/// `Ontology` and `Entity` are super-categories and fail with
/// [`TaxonomyError::UnsupportedCategory`]; callers populating menus
/// should restrict themselves to [`Category::entity_subtypes`].
pub fn mint(
    category: Category,
    iri: Iri,
    factory: &dyn EntityFactory,
) -> Result<NamedObject, TaxonomyError> {
    tracing::debug!(category = %category, iri = %iri, "minting named entity");

    match category {
        Category::Class => Ok(factory.make_class(iri).into()),
        Category::ObjectProperty => Ok(factory.make_object_property(iri).into()),
        Category::DataProperty => Ok(factory.make_data_property(iri).into()),
        Category::AnnotationProperty => Ok(factory.make_annotation_property(iri).into()),
        Category::Individual => Ok(factory.make_named_individual(iri).into()),
        Category::Datatype => Ok(factory.make_datatype(iri).into()),
        Category::Ontology | Category::Entity => {
            Err(TaxonomyError::UnsupportedCategory { category })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_class() {
        let object = mint(
            Category::Class,
            Iri::new("http://example.org/Pizza"),
            &ModelFactory,
        )
        .unwrap();
        assert_eq!(object.category(), Category::Class);
        assert_eq!(object.iri().as_str(), "http://example.org/Pizza");
    }

    #[test]
    fn test_mint_rejects_super_categories() {
        for category in [Category::Ontology, Category::Entity] {
            let result = mint(category, Iri::new("http://example.org/x"), &ModelFactory);
            assert_eq!(result, Err(TaxonomyError::UnsupportedCategory { category }));
        }
    }

    #[test]
    fn test_mint_returns_factory_result_for_every_subtype() {
        for &category in Category::entity_subtypes() {
            let object = mint(category, Iri::new("http://example.org/x"), &ModelFactory)
                .expect("entity subtypes are mintable");
            assert_eq!(object.category(), category);
        }
    }
}
