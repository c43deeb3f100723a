//! Category enum for the fixed named-object taxonomy.

use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::models::object::TYPE_INDEX;

/// Fixed categories of named objects in an ontology model.
///
/// `Ontology` and `Entity` are super-categories: an ontology is a
/// container, and "entity" covers every named thing inside one. The
/// remaining six variants are the concrete entity kinds, enumerated by
/// [`Category::entity_subtypes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Ontology,
    Entity,
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Individual,
    Datatype,
}

impl Category {
    /// Returns a static slice of all categories in declared order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Ontology,
            Category::Entity,
            Category::Class,
            Category::ObjectProperty,
            Category::DataProperty,
            Category::AnnotationProperty,
            Category::Individual,
            Category::Datatype,
        ]
    }

    /// Returns the entity kinds, in menu order.
    ///
    /// `Ontology` and `Entity` are super-categories and are excluded.
    pub fn entity_subtypes() -> &'static [Category] {
        &[
            Category::Class,
            Category::ObjectProperty,
            Category::DataProperty,
            Category::AnnotationProperty,
            Category::Individual,
            Category::Datatype,
        ]
    }

    /// Returns the plural display label.
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Ontology => "Ontologies",
            Category::Entity => "Entities",
            Category::Class => "Classes",
            Category::ObjectProperty => "Object Properties",
            Category::DataProperty => "Data Properties",
            Category::AnnotationProperty => "Annotation Properties",
            Category::Individual => "Individuals",
            Category::Datatype => "Datatypes",
        }
    }

    /// Returns the singular display label.
    pub fn singular(&self) -> &'static str {
        match self {
            Category::Ontology => "Ontology",
            Category::Entity => "Entity",
            Category::Class => "Class",
            Category::ObjectProperty => "Object Property",
            Category::DataProperty => "Data Property",
            Category::AnnotationProperty => "Annotation Property",
            Category::Individual => "Individual",
            Category::Datatype => "Datatype",
        }
    }

    /// Returns the canonical names of all categories.
    ///
    /// These are the variant names, not the display labels. Useful for
    /// validating user-supplied category names before parsing.
    pub fn names() -> HashSet<String> {
        Category::all().iter().map(|c| c.to_string()).collect()
    }

    /// Returns true if this category is one of the entity kinds.
    pub fn is_entity_subtype(&self) -> bool {
        Category::entity_subtypes().contains(self)
    }

    /// Looks up the category for a concrete named-object type descriptor.
    ///
    /// The descriptor must be the [`TypeId`] of one of the kind types in
    /// [`crate::models::object`]; anything else is outside the supported
    /// domain model.
    pub fn of_type_id(type_id: TypeId) -> Result<Category, TaxonomyError> {
        TYPE_INDEX
            .get(&type_id)
            .copied()
            .ok_or(TaxonomyError::UnrecognizedType { type_id })
    }

    /// Classifies a value by its dynamic type.
    pub fn of_value(value: &dyn Any) -> Result<Category, TaxonomyError> {
        Category::of_type_id(value.type_id())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ontology" | "ontology" => Ok(Category::Ontology),
            "Entity" | "entity" => Ok(Category::Entity),
            "Class" | "class" => Ok(Category::Class),
            "ObjectProperty" | "objectproperty" => Ok(Category::ObjectProperty),
            "DataProperty" | "dataproperty" => Ok(Category::DataProperty),
            "AnnotationProperty" | "annotationproperty" => Ok(Category::AnnotationProperty),
            "Individual" | "individual" => Ok(Category::Individual),
            "Datatype" | "datatype" => Ok(Category::Datatype),
            _ => Err(format!(
                "Invalid category '{}'. Valid values: Ontology, Entity, Class, \
                 ObjectProperty, DataProperty, AnnotationProperty, Individual, Datatype",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::object::{OwlNamedIndividual, OwlOntology};

    #[test]
    fn test_labels_are_non_empty() {
        for category in Category::all() {
            assert!(!category.plural().is_empty());
            assert!(!category.singular().is_empty());
        }
    }

    #[test]
    fn test_object_property_labels() {
        assert_eq!(Category::ObjectProperty.plural(), "Object Properties");
        assert_eq!(Category::ObjectProperty.singular(), "Object Property");
    }

    #[test]
    fn test_entity_subtypes_excludes_super_categories() {
        let subtypes = Category::entity_subtypes();
        assert_eq!(subtypes.len(), 6);
        assert!(!subtypes.contains(&Category::Ontology));
        assert!(!subtypes.contains(&Category::Entity));
    }

    #[test]
    fn test_entity_subtypes_order() {
        assert_eq!(
            Category::entity_subtypes(),
            &[
                Category::Class,
                Category::ObjectProperty,
                Category::DataProperty,
                Category::AnnotationProperty,
                Category::Individual,
                Category::Datatype,
            ]
        );
    }

    #[test]
    fn test_names_has_one_entry_per_category() {
        let names = Category::names();
        assert_eq!(names.len(), 8);
        assert!(names.contains("ObjectProperty"));
    }

    #[test]
    fn test_of_type_id() {
        assert_eq!(
            Category::of_type_id(TypeId::of::<OwlOntology>()),
            Ok(Category::Ontology)
        );
    }

    #[test]
    fn test_of_type_id_rejects_unknown_descriptor() {
        let result = Category::of_type_id(TypeId::of::<String>());
        assert_eq!(
            result,
            Err(TaxonomyError::UnrecognizedType {
                type_id: TypeId::of::<String>()
            })
        );
    }

    #[test]
    fn test_of_value() {
        let individual = OwlNamedIndividual::new("http://example.org/italy");
        assert_eq!(Category::of_value(&individual), Ok(Category::Individual));
    }

    #[test]
    fn test_parse_canonical_and_lowercase() {
        assert_eq!("ObjectProperty".parse(), Ok(Category::ObjectProperty));
        assert_eq!("objectproperty".parse(), Ok(Category::ObjectProperty));
        assert!("object properties".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in Category::all() {
            assert_eq!(category.to_string().parse(), Ok(*category));
        }
    }
}
