//! Ontokind - Named-object taxonomy for ontology models
//!
//! A closed set of categories over the named things an ontology model
//! hands out (the ontology itself, classes, properties, individuals,
//! datatypes), with display labels, classification by dynamic type,
//! and minting of fresh entities through a factory seam.

pub mod error;
pub mod factory;
pub mod models;
