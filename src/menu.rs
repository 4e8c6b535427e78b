//! Menu catalog data model.
//!
//! The catalog is a fixed, ordered list of drink categories, each holding
//! the items shown as cards on the board. A built-in house menu ships with
//! the binary; venues can replace it with their own TOML file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Ingredient list shown on the card subtitle. May be empty.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Card subtitle: the ingredients joined with a comma, or a placeholder
    /// when the kitchen hasn't filled them in yet.
    pub fn ingredient_summary(&self) -> String {
        if self.ingredients.is_empty() {
            "Ingredients: (coming soon)".to_string()
        } else {
            self.ingredients.join(", ")
        }
    }
}

/// A named group of items (one tab on the board).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (e.g. "beer"), used in logs and catalog files.
    pub key: String,
    /// Human-readable tab label.
    pub label: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The full menu, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read menu file: {:?}", path))?;
        let catalog: Catalog =
            toml::from_str(&content).with_context(|| "Failed to parse menu file")?;
        if catalog.categories.is_empty() {
            anyhow::bail!("Menu file {:?} contains no categories", path);
        }
        Ok(catalog)
    }

    /// Save the catalog to a TOML file (used to bootstrap a custom menu).
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize menu")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write menu file: {:?}", path))?;
        Ok(())
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The house menu bundled with the binary. Category order is fixed:
    /// popular first, soft drinks last.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category {
                    key: "popular".to_string(),
                    label: "Popular cocktails".to_string(),
                    items: vec![
                        MenuItem::new("Margarita", &["tequila", "triple sec", "lime juice"]),
                        MenuItem::new("Mojito", &["white rum", "mint", "lime", "soda water"]),
                        MenuItem::new("Old Fashioned", &["bourbon", "angostura bitters", "sugar"]),
                        MenuItem::new("Negroni", &["gin", "campari", "sweet vermouth"]),
                        MenuItem::new(
                            "Espresso Martini",
                            &["vodka", "coffee liqueur", "espresso"],
                        ),
                        MenuItem::new("Aperol Spritz", &["aperol", "prosecco", "soda water"]),
                    ],
                },
                Category {
                    key: "specials".to_string(),
                    label: "Rady's specials".to_string(),
                    items: vec![
                        MenuItem::new(
                            "Rady's Sunset",
                            &["dark rum", "passion fruit", "orange", "grenadine"],
                        ),
                        MenuItem::new("Smoked Pear", &["mezcal", "pear syrup", "lemon", "thyme"]),
                        MenuItem::new("Midnight Cooler", &[]),
                    ],
                },
                Category {
                    key: "shots".to_string(),
                    label: "Shots".to_string(),
                    items: vec![
                        MenuItem::new("Tequila", &["tequila blanco", "salt", "lime"]),
                        MenuItem::new("B-52", &["coffee liqueur", "irish cream", "triple sec"]),
                        MenuItem::new("Jägermeister", &["jägermeister, ice cold"]),
                    ],
                },
                Category {
                    key: "beer".to_string(),
                    label: "Beer".to_string(),
                    items: vec![
                        MenuItem::new("House Lager", &["draft, 0.5l"]),
                        MenuItem::new("IPA", &["draft, 0.4l"]),
                        MenuItem::new("Wheat Beer", &["bottle, 0.5l"]),
                        MenuItem::new("Non-alcoholic", &["bottle, 0.33l"]),
                    ],
                },
                Category {
                    key: "soft".to_string(),
                    label: "Soft drink".to_string(),
                    items: vec![
                        MenuItem::new("Cola", &[]),
                        MenuItem::new("Fresh Lemonade", &["lemon", "mint", "sparkling water"]),
                        MenuItem::new("Orange Juice", &[]),
                        MenuItem::new("Still Water", &[]),
                    ],
                },
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
