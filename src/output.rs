//! CLI output formatting.
//!
//! Output is information-first: each portfolio entry leads with its
//! positional index and title, with image paths shown as indented context
//! lines. Entries are grouped by the gallery page they land on, so the
//! inventory reads the way the site paginates it.
//!
//! ```text
//! Portfolio (13 entries, 2 pages of 12)
//! Page 1
//!     001 2025 글로벌 IT 혁신 컨퍼런스 (3 images)
//!         전 세계 IT 리더 500인이 모인 프리미엄 국제 행사
//!         Thumbnail: image/portfolio/1.jpg
//!         Image: image/portfolio/1.jpg
//!         Image: image/portfolio/2.jpg
//!         Image: image/portfolio/3.jpg
//!     ...
//! Page 2
//!     013 에너지 혁신 포럼 (1 image)
//!         지속 가능한 미래를 위한 에너지 산업 전문가 회의
//!         Thumbnail: image/portfolio/1.jpg
//! ```
//!
//! Each `format_*` function returns `Vec<String>` and is pure; the `print_*`
//! wrappers write to stdout.

use crate::catalog::PortfolioEntry;
use crate::gallery::{Gallery, PaginationSource};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Entry header: positional index, title, image count.
fn entry_header(index: usize, entry: &PortfolioEntry) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        entry.title,
        plural(entry.images.len(), "image", "images")
    )
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Format the catalog inventory, grouped by page.
pub fn format_catalog_output(gallery: &Gallery) -> Vec<String> {
    let mut lines = Vec::new();
    let pages = gallery.page_count();
    lines.push(format!(
        "Portfolio ({}, {} of {})",
        plural(gallery.total(), "entry", "entries"),
        plural(pages, "page", "pages"),
        gallery.page_size()
    ));

    let mut position = 0;
    for page in 1..=pages {
        lines.push(format!("Page {page}"));
        for entry in gallery.items_for_page(page) {
            position += 1;
            lines.push(format!("{}{}", indent(1), entry_header(position, entry)));
            let desc = truncate_desc(entry.description.trim(), 60);
            if !desc.is_empty() {
                lines.push(format!("{}{}", indent(2), desc));
            }
            lines.push(format!("{}Thumbnail: {}", indent(2), entry.thumbnail));
            if entry.has_multiple_images() || entry.images.first() != Some(&entry.thumbnail) {
                for image in &entry.images {
                    lines.push(format!("{}Image: {}", indent(2), image));
                }
            }
        }
    }
    lines
}

pub fn print_catalog_output(gallery: &Gallery) {
    for line in format_catalog_output(gallery) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::test_helpers::*;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn header_line_counts_entries_and_pages() {
        let gallery = Gallery::new(catalog_of(13), 12);
        let lines = format_catalog_output(&gallery);
        assert_eq!(lines[0], "Portfolio (13 entries, 2 pages of 12)");
    }

    #[test]
    fn single_entry_header_is_singular() {
        let gallery = Gallery::new(catalog_of(1), 12);
        let lines = format_catalog_output(&gallery);
        assert_eq!(lines[0], "Portfolio (1 entry, 1 page of 12)");
        assert!(lines.contains(&"    001 Project 1 (1 image)".to_string()));
    }

    #[test]
    fn entries_grouped_by_page() {
        let gallery = Gallery::new(catalog_of(13), 12);
        let lines = format_catalog_output(&gallery);
        let page2 = lines.iter().position(|l| l == "Page 2").unwrap();
        assert_eq!(lines[page2 + 1], "    013 Project 13 (1 image)");
    }

    #[test]
    fn multi_image_entries_list_images() {
        let gallery = Gallery::new(catalog_with_image_counts(&[2]), 12);
        let lines = format_catalog_output(&gallery);
        assert!(lines.contains(&"        Image: image/project-1/2.jpg".to_string()));
    }

    #[test]
    fn thumbnail_only_entry_lists_no_images() {
        let gallery = Gallery::new(catalog_with_image_counts(&[1]), 12);
        let lines = format_catalog_output(&gallery);
        assert!(lines.contains(&"        Thumbnail: image/project-1/1.jpg".to_string()));
        assert!(!lines.iter().any(|l| l.trim_start().starts_with("Image:")));
    }

    #[test]
    fn empty_catalog_has_only_header() {
        let gallery = Gallery::new(Catalog::default(), 12);
        let lines = format_catalog_output(&gallery);
        assert_eq!(lines, vec!["Portfolio (0 entries, 0 pages of 12)".to_string()]);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_desc("짧은 설명", 10), "짧은 설명");
        assert_eq!(truncate_desc("abcdef", 3), "abc...");
    }
}
