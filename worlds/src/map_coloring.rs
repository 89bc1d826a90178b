//! Map coloring as a constraint-satisfaction problem.
//!
//! Regions are variables, colors are values, and the single
//! constraint family is inequality across each declared border.

use wayfarer_csp::model::{Assignment, Csp};

/// Color a map so no two bordering regions share a color.
#[derive(Debug, Clone)]
pub struct MapColoring {
    regions: Vec<String>,
    borders: Vec<(String, String)>,
    colors: Vec<String>,
}

impl MapColoring {
    /// Build a map from region names, undirected borders, and the
    /// shared color palette. Border pairs may name regions in either
    /// order.
    #[must_use]
    pub fn new(
        regions: Vec<String>,
        borders: Vec<(String, String)>,
        colors: Vec<String>,
    ) -> Self {
        Self {
            regions,
            borders,
            colors,
        }
    }

    /// The seven-region Australia map with a three-color palette.
    /// Tasmania borders nothing, so it colors freely.
    #[must_use]
    pub fn australia() -> Self {
        let regions = ["wa", "nt", "sa", "q", "nsw", "v", "t"]
            .map(String::from)
            .to_vec();
        let borders = [
            ("wa", "nt"),
            ("wa", "sa"),
            ("nt", "sa"),
            ("nt", "q"),
            ("sa", "q"),
            ("sa", "nsw"),
            ("sa", "v"),
            ("q", "nsw"),
            ("nsw", "v"),
        ]
        .map(|(a, b)| (a.to_owned(), b.to_owned()))
        .to_vec();
        let colors = ["red", "green", "blue"].map(String::from).to_vec();
        Self::new(regions, borders, colors)
    }

    /// Three mutually bordering regions with only two colors. The
    /// smallest full-inequality instance that is provably unsolvable.
    #[must_use]
    pub fn unsolvable_triangle() -> Self {
        let regions = ["a", "b", "c"].map(String::from).to_vec();
        let borders = [("a", "b"), ("b", "c"), ("a", "c")]
            .map(|(a, b)| (a.to_owned(), b.to_owned()))
            .to_vec();
        let colors = ["red", "green"].map(String::from).to_vec();
        Self::new(regions, borders, colors)
    }

    /// The declared borders.
    #[must_use]
    pub fn borders(&self) -> &[(String, String)] {
        &self.borders
    }

    /// The shared color palette.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Csp for MapColoring {
    type Var = String;
    type Value = String;

    fn variables(&self) -> &[String] {
        &self.regions
    }

    fn domain(&self, _var: &String) -> &[String] {
        &self.colors
    }

    fn is_consistent(
        &self,
        var: &String,
        value: &String,
        assignment: &Assignment<String, String>,
    ) -> bool {
        self.borders.iter().all(|(a, b)| {
            let neighbor = if a == var {
                b
            } else if b == var {
                a
            } else {
                return true;
            };
            assignment.get(neighbor) != Some(value)
        })
    }
}
