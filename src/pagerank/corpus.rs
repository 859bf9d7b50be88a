//! Link graph construction from a directory of HTML pages

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("anchor pattern is valid")
});

/// Pages and the in-corpus pages each one links to.
///
/// Self-links and links to pages outside the corpus are dropped when the
/// corpus is built, so every link target is also a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus from raw `(page, outbound links)` pairs.
    pub fn from_links<I, P, L>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = pages
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let links = raw
            .iter()
            .map(|(page, targets)| {
                let kept = targets
                    .iter()
                    .filter(|target| *target != page && raw.contains_key(*target))
                    .cloned()
                    .collect();
                (page.clone(), kept)
            })
            .collect();

        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Page names in ascending order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outbound links of `page`; `None` for a page outside the corpus.
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.links.iter()
    }
}

/// Every `href` target of an `<a ...>` tag in `html`.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read every `.html` file in `directory` and build its link graph.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the directory or a page cannot be read.
pub fn crawl(directory: &Path) -> Result<Corpus, crate::Error> {
    let entries = fs::read_dir(directory)
        .map_err(|e| crate::Error::io(format!("read directory {}", directory.display()), e))?;

    let mut pages = BTreeMap::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| crate::Error::io(format!("list directory {}", directory.display()), e))?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if !filename.ends_with(".html") {
            continue;
        }

        let path = entry.path();
        let contents = fs::read_to_string(&path)
            .map_err(|e| crate::Error::io(format!("read page {}", path.display()), e))?;
        pages.insert(filename, extract_links(&contents));
    }

    let corpus = Corpus::from_links(pages);
    log::info!(
        "crawled {} pages from {}",
        corpus.len(),
        directory.display()
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let html = r#"
            <a href="1.html">One</a>
            <a class="nav" href="2.html">Two</a>
            <link href="style.css">
            <a  target="_blank" href="3.html">Three</a>
        "#;
        let links: Vec<String> = extract_links(html).into_iter().collect();
        assert_eq!(links, vec!["1.html", "2.html", "3.html"]);
    }

    #[test]
    fn test_from_links_filters_self_and_external() {
        let corpus = Corpus::from_links([
            ("1.html", vec!["1.html", "2.html", "https://example.com"]),
            ("2.html", vec!["1.html"]),
            ("3.html", vec![]),
        ]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(
            corpus.links("1.html").unwrap().iter().collect::<Vec<_>>(),
            vec!["2.html"]
        );
        assert!(corpus.links("3.html").unwrap().is_empty());
        assert!(corpus.links("4.html").is_none());
        assert_eq!(
            corpus.pages().collect::<Vec<_>>(),
            vec!["1.html", "2.html", "3.html"]
        );
    }
}
