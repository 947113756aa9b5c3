//! Shared contracts of the back-office table screens: record types, column
//! metadata and the filter / sort / pagination state exchanged with the
//! table engine.

pub mod domain;
pub mod shared;
