//! Shared test utilities: small catalogs built in code.
//!
//! Entries are named `Project N` (1-based) with images under
//! `image/project-N/`, so assertions can predict titles and paths.

use crate::catalog::{Catalog, PortfolioEntry};

/// Entry `n` (1-based) with `images` images.
pub fn entry(n: usize, images: usize) -> PortfolioEntry {
    let paths = (1..=images)
        .map(|i| format!("image/project-{n}/{i}.jpg"))
        .collect();
    PortfolioEntry::new(
        format!("Project {n}"),
        format!("Description of project {n}"),
        format!("image/project-{n}/1.jpg"),
        paths,
    )
}

/// A catalog of `count` single-image entries.
pub fn catalog_of(count: usize) -> Catalog {
    Catalog::from_entries((1..=count).map(|n| entry(n, 1)).collect())
}

/// A catalog with one entry per element of `counts`, each with that many images.
pub fn catalog_with_image_counts(counts: &[usize]) -> Catalog {
    Catalog::from_entries(
        counts
            .iter()
            .enumerate()
            .map(|(i, &images)| entry(i + 1, images))
            .collect(),
    )
}
