//! Seed catalogs: the fixed sample hierarchy and generated synthetic ones.

use crate::domain::{DomainError, DomainResult};

/// Upper bound for generated catalogs. The scan strategy is quadratic.
pub const MAX_SYNTHETIC_NODES: usize = 250_000;

/// Upper bound for the number of levels in a generated catalog.
pub const MAX_SYNTHETIC_DEPTH: usize = 1_000;

/// Category to be seeded, with its subcategories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCategory {
    pub name: String,
    pub description: String,
    pub children: Vec<SeedCategory>,
}

impl SeedCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SeedCategory>) -> Self {
        self.children = children;
        self
    }

    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SeedCategory::subtree_size).sum::<usize>()
    }
}

fn cat(name: &str, description: &str) -> SeedCategory {
    SeedCategory::new(name, description)
}

/// Fixed four-level sample hierarchy: 3 roots, 35 categories.
pub fn sample_catalog() -> Vec<SeedCategory> {
    vec![
        cat("Electronics", "Electronic devices and gadgets").with_children(vec![
            cat("Computers", "Desktop and laptop computers").with_children(vec![
                cat("Laptops", "Portable computers").with_children(vec![
                    cat("Gaming Laptops", "High-performance gaming laptops"),
                    cat("Business Laptops", "Professional business laptops"),
                ]),
                cat("Desktops", "Desktop computers").with_children(vec![
                    cat("Dell Desktops", "Dell brand desktops"),
                    cat("HP Desktops", "HP brand desktops"),
                ]),
            ]),
            cat("Phones", "Mobile devices").with_children(vec![
                cat("Smartphones", "Smart mobile phones").with_children(vec![
                    cat("Samsung Phones", "Samsung smartphones"),
                    cat("iPhone", "Apple iPhones"),
                ]),
                cat("Tablets", "Tablet devices"),
            ]),
            cat("Accessories", "Electronic accessories")
                .with_children(vec![cat("Monitors", "Computer monitors")]),
        ]),
        cat("Clothing", "Apparel and fashion items").with_children(vec![
            cat("Men's Clothing", "Clothing for men").with_children(vec![
                cat("Shirts", "Men's shirts").with_children(vec![
                    cat("Formal Shirts", "Formal dress shirts"),
                    cat("Casual Shirts", "Casual shirts"),
                ]),
                cat("Pants", "Men's pants"),
            ]),
            cat("Women's Clothing", "Clothing for women").with_children(vec![
                cat("Dresses", "Women's dresses"),
                cat("Skirts", "Women's skirts"),
            ]),
        ]),
        cat("Food & Beverages", "Food and drink products").with_children(vec![
            cat("Beverages", "Drinks").with_children(vec![
                cat("Coffee", "Coffee beverages").with_children(vec![
                    cat("Espresso", "Espresso coffee"),
                    cat("Americano", "Americano coffee"),
                ]),
                cat("Tea", "Tea beverages"),
            ]),
            cat("Snacks", "Snack foods").with_children(vec![
                cat("Chips & Crisps", "Crispy snacks"),
                cat("Candy", "Sweet snacks").with_children(vec![
                    cat("Soft Candy", "Soft candy items"),
                    cat("Hard Candy", "Hard candy items"),
                ]),
            ]),
        ]),
    ]
}

/// Shape of a complete synthetic hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticShape {
    breadth: usize,
    depth: usize,
}

impl SyntheticShape {
    /// `breadth` roots, each node with `breadth` children, `depth` levels.
    pub fn new(breadth: usize, depth: usize) -> DomainResult<Self> {
        if breadth == 0 {
            return Err(DomainError::InvalidShape {
                message: "breadth must be at least 1".to_string(),
            });
        }
        if depth == 0 {
            return Err(DomainError::InvalidShape {
                message: "depth must be at least 1".to_string(),
            });
        }
        if depth > MAX_SYNTHETIC_DEPTH {
            return Err(DomainError::InvalidShape {
                message: format!("depth must be at most {MAX_SYNTHETIC_DEPTH}, got {depth}"),
            });
        }
        let requested = Self::count(breadth, depth).unwrap_or(usize::MAX);
        if requested > MAX_SYNTHETIC_NODES {
            return Err(DomainError::CatalogTooLarge {
                requested,
                limit: MAX_SYNTHETIC_NODES,
            });
        }
        Ok(Self { breadth, depth })
    }

    pub fn breadth(&self) -> usize {
        self.breadth
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of categories: breadth + breadth² + ... + breadth^depth.
    pub fn node_count(&self) -> usize {
        Self::count(self.breadth, self.depth).unwrap_or(usize::MAX)
    }

    fn count(breadth: usize, depth: usize) -> Option<usize> {
        let mut total = 0usize;
        let mut level = 1usize;
        for _ in 0..depth {
            level = level.checked_mul(breadth)?;
            total = total.checked_add(level)?;
            if total > MAX_SYNTHETIC_NODES {
                break;
            }
        }
        Some(total)
    }
}

/// Generates a complete hierarchy named by dotted path, e.g. `Category 2.1.3`.
pub fn synthetic_catalog(shape: SyntheticShape) -> Vec<SeedCategory> {
    (1..=shape.breadth)
        .map(|i| synthetic_node(i.to_string(), 1, shape))
        .collect()
}

fn synthetic_node(path: String, level: usize, shape: SyntheticShape) -> SeedCategory {
    let children = if level < shape.depth {
        (1..=shape.breadth)
            .map(|i| synthetic_node(format!("{path}.{i}"), level + 1, shape))
            .collect()
    } else {
        Vec::new()
    };
    SeedCategory::new(
        format!("Category {path}"),
        format!("Synthetic category at level {level}"),
    )
    .with_children(children)
}
