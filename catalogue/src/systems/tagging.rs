use std::collections::{HashMap, HashSet};

/// Items with tags plus the inverted tag -> items index.
#[derive(Debug, Default)]
pub struct TaggingSystem {
    items: HashMap<String, HashSet<String>>,
    index: HashMap<String, HashSet<String>>,
}

fn sorted<'a>(set: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = set.into_iter().cloned().collect();
    out.sort_unstable();
    out.dedup();
    out
}

impl TaggingSystem {
    pub fn new() -> Self { Self::default() }

    /// Adds or retags an item; tags it no longer carries are unindexed.
    pub fn add_item<I, S>(&mut self, item: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: HashSet<String> = tags.into_iter().map(Into::into).collect();
        if let Some(old) = self.items.remove(item) {
            for tag in old.difference(&tags) {
                if let Some(ids) = self.index.get_mut(tag) {
                    ids.remove(item);
                    if ids.is_empty() {
                        self.index.remove(tag);
                    }
                }
            }
        }
        for tag in &tags {
            self.index.entry(tag.clone()).or_default().insert(item.to_owned());
        }
        self.items.insert(item.to_owned(), tags);
    }

    /// Every tag carried by at least one item.
    pub fn tags(&self) -> Vec<String> { sorted(self.index.keys()) }

    pub fn find_by_tag(&self, tag: &str) -> Vec<String> {
        self.index.get(tag).map_or_else(Vec::new, |ids| sorted(ids))
    }

    /// Items carrying every tag. No tags matches nothing.
    pub fn find_by_all_tags(&self, tags: &[&str]) -> Vec<String> {
        let Some((first, rest)) = tags.split_first() else {
            return Vec::new();
        };
        let Some(seed) = self.index.get(*first) else {
            return Vec::new();
        };
        sorted(seed.iter().filter(|id| {
            rest.iter().all(|t| self.index.get(*t).is_some_and(|ids| ids.contains(*id)))
        }))
    }

    pub fn find_by_any_tags(&self, tags: &[&str]) -> Vec<String> {
        sorted(tags.iter().filter_map(|t| self.index.get(*t)).flatten())
    }

    /// Items sharing at least one tag with `item`, excluding itself.
    pub fn similar_items(&self, item: &str) -> Vec<String> {
        let Some(tags) = self.items.get(item) else {
            return Vec::new();
        };
        sorted(
            tags.iter()
                .filter_map(|t| self.index.get(t))
                .flatten()
                .filter(|id| id.as_str() != item),
        )
    }
}
