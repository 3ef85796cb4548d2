//! Inline sample report rendered at page load.

use super::{Approach, HealthHack, Mechanism, Product, Report};

impl Report {
    /// The placeholder report shown until real report data is wired in.
    pub fn sample() -> Self {
        Report {
            health_target: "Improve your health".to_string(),
            mechanisms: vec![Mechanism {
                name: "Mechanism 1".to_string(),
                approaches: vec![Approach {
                    name: "Approach 1".to_string(),
                    health_hacks: vec![HealthHack {
                        name: "Health Hack 1".to_string(),
                        products: vec![
                            Product {
                                name: "Product 1".to_string(),
                                description: "Description 1".to_string(),
                            },
                            Product {
                                name: "Product 2".to_string(),
                                description: "Description 2".to_string(),
                            },
                        ],
                    }],
                }],
            }],
        }
    }
}
