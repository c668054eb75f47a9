//! Domain entities: categories, functors, and the diagram that holds them

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

use crate::domain::error::DiagramError;

/// A named point in the diagram: a mathematical category with a fixed
/// 3D position and display styling.
///
/// Positions are authored constants, never computed. The color is a CSS
/// color string passed through to the chart as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Authored position (x, y, z)
    pub pos: [f64; 3],
    /// CSS color string
    pub color: String,
    /// Marker symbol name. Part of the authored data and of `Display`
    /// output; the marker layer does not apply it.
    pub symbol: String,
}

impl Category {
    pub fn new(pos: [f64; 3], color: &str, symbol: &str) -> Self {
        Category {
            pos,
            color: color.to_string(),
            symbol: symbol.to_string(),
        }
    }
}

/// A directed, labeled connection between two categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Functor {
    /// Name of the source category
    pub source: String,
    /// Name of the target category
    pub target: String,
    /// Display label, drawn at the edge midpoint
    pub label: String,
}

impl Functor {
    pub fn new(source: &str, target: &str, label: &str) -> Self {
        Functor {
            source: source.to_string(),
            target: target.to_string(),
            label: label.to_string(),
        }
    }
}

impl fmt::Display for Functor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} : {}", self.source, self.target, self.label)
    }
}

/// The complete diagram: categories keyed by name plus functors in
/// authoring order.
///
/// `BTreeMap` keeps the category iteration order deterministic, so two
/// renders of the same diagram serialize identically.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub categories: BTreeMap<String, Category>,
    pub functors: Vec<Functor>,
}

impl Diagram {
    pub fn new() -> Self {
        Diagram::default()
    }

    /// Adds a category under `name`, replacing any previous entry.
    pub fn add_category(&mut self, name: &str, category: Category) -> &mut Self {
        self.categories.insert(name.to_string(), category);
        self
    }

    /// Adds a functor. Endpoints are not checked here; see [`Diagram::validate`].
    pub fn add_functor(&mut self, source: &str, target: &str, label: &str) -> &mut Self {
        self.functors.push(Functor::new(source, target, label));
        self
    }

    /// Returns the authored position of the named category, if present.
    pub fn position_of(&self, name: &str) -> Option<[f64; 3]> {
        self.categories.get(name).map(|c| c.pos)
    }

    /// Checks that every functor endpoint names an existing category.
    ///
    /// Runs before any rendering so that a dangling reference aborts the
    /// run without touching the output file.
    ///
    /// # Errors
    ///
    /// Returns the first [`DiagramError::UnknownSource`] or
    /// [`DiagramError::UnknownTarget`] encountered, in functor order.
    pub fn validate(&self) -> Result<(), DiagramError> {
        for functor in &self.functors {
            if !self.categories.contains_key(&functor.source) {
                return Err(DiagramError::UnknownSource {
                    label: functor.label.clone(),
                    name: functor.source.clone(),
                });
            }
            if !self.categories.contains_key(&functor.target) {
                return Err(DiagramError::UnknownTarget {
                    label: functor.label.clone(),
                    name: functor.target.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "diagram {{")?;
        writeln!(f, "  categories")?;
        for (name, category) in &self.categories {
            let [x, y, z] = category.pos;
            writeln!(
                f,
                "    {} ({}, {}, {}) {} {}",
                name, x, y, z, category.color, category.symbol
            )?;
        }
        if !self.functors.is_empty() {
            writeln!(f, "  functors")?;
            writeln!(
                f,
                "{}",
                self.functors
                    .iter()
                    .map(|fun| format!("    {}", fun))
                    .join("\n")
            )?;
        }
        write!(f, "}}")
    }
}
