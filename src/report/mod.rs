//! Research report data model
//!
//! A report is a fixed five-level tree: health target -> mechanisms ->
//! approaches -> health hacks -> products. Values are built once, never
//! mutated afterwards, and traversed top to bottom by the renderer. Child
//! sequences keep their input order and may be empty at any level.

mod sample;

use serde::{Deserialize, Serialize};

/// Top-level research report for one health target
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The health goal the report addresses
    pub health_target: String,
    /// Mechanisms supporting the target, in display order
    #[serde(default)]
    pub mechanisms: Vec<Mechanism>,
}

/// A biological mechanism backing the health target
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mechanism {
    pub name: String,
    #[serde(default)]
    pub approaches: Vec<Approach>,
}

/// A practical approach that exercises a mechanism
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approach {
    pub name: String,
    #[serde(default)]
    pub health_hacks: Vec<HealthHack>,
}

/// A concrete hack with its supporting products
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthHack {
    pub name: String,
    /// Upstream report JSON names this list `amazon_products`
    #[serde(default, alias = "amazon_products")]
    pub products: Vec<Product>,
}

/// A product suggestion attached to a hack
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
}

impl Report {
    /// Parse a report from its JSON wire form.
    ///
    /// The crate performs no fetching itself; hosts hand over report JSON
    /// that is already validated upstream.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_format_with_amazon_products_alias() {
        let json = r#"{
            "health_target": "Increase iron levels during pregnancy",
            "mechanisms": [{
                "name": "Vitamin C co-supplementation to enhance iron absorption.",
                "approaches": [{
                    "name": "Take Vitamin C supplements alongside iron supplements",
                    "health_hacks": [{
                        "name": "Morning supplement stack",
                        "amazon_products": [
                            { "name": "Solgar Vitamin C", "description": "1000mg vegetarian capsules" },
                            { "name": "Ferrochel iron bisglycinate", "description": "Gentle chelated iron" }
                        ]
                    }]
                }]
            }]
        }"#;

        let report = Report::from_json(json).unwrap();
        assert_eq!(report.health_target, "Increase iron levels during pregnancy");
        assert_eq!(report.mechanisms.len(), 1);

        let hack = &report.mechanisms[0].approaches[0].health_hacks[0];
        assert_eq!(hack.products.len(), 2);
        assert_eq!(hack.products[0].name, "Solgar Vitamin C");
        assert_eq!(hack.products[1].description, "Gentle chelated iron");
    }

    #[test]
    fn missing_child_sequences_default_to_empty() {
        let report = Report::from_json(
            r#"{ "health_target": "Sleep better", "mechanisms": [{ "name": "Circadian alignment" }] }"#,
        )
        .unwrap();

        assert_eq!(report.mechanisms.len(), 1);
        assert!(report.mechanisms[0].approaches.is_empty());
    }

    #[test]
    fn sample_report_shape() {
        let sample = Report::sample();
        assert_eq!(sample.health_target, "Improve your health");
        assert_eq!(sample.mechanisms.len(), 1);
        assert_eq!(sample.mechanisms[0].approaches.len(), 1);

        let products = &sample.mechanisms[0].approaches[0].health_hacks[0].products;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Product 1");
        assert_eq!(products[1].description, "Description 2");
    }
}
