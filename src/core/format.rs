use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub const DEFAULT_MAX_LISTED_ELEMENTS: usize = 50;

/// Knobs for rendering element lists inside failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_max_listed_elements")]
    pub max_listed_elements: usize,
    #[serde(default = "default_show_copy_counts")]
    pub show_copy_counts: bool,
}

fn default_max_listed_elements() -> usize {
    DEFAULT_MAX_LISTED_ELEMENTS
}

fn default_show_copy_counts() -> bool {
    true
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_listed_elements: DEFAULT_MAX_LISTED_ELEMENTS,
            show_copy_counts: true,
        }
    }
}

impl FormatConfig {
    /// `[a, b, c]`, truncated after `max_listed_elements` items.
    pub fn render_list<T: Debug>(&self, items: &[T]) -> String {
        self.render_rendered(items.iter().map(|item| format!("{:?}", item)).collect())
    }

    /// Like [`render_list`](Self::render_list) but groups equal renderings
    /// as `"a" [2 copies]` when `show_copy_counts` is set.
    pub fn render_counted<T: Debug>(&self, items: &[T]) -> String {
        let rendered: Vec<String> = items.iter().map(|item| format!("{:?}", item)).collect();
        if !self.show_copy_counts {
            return self.render_rendered(rendered);
        }

        let mut groups: Vec<(String, usize)> = Vec::new();
        for item in rendered {
            match groups.iter_mut().find(|(text, _)| *text == item) {
                Some((_, count)) => *count += 1,
                None => groups.push((item, 1)),
            }
        }

        self.render_rendered(
            groups
                .into_iter()
                .map(|(text, count)| {
                    if count > 1 {
                        format!("{} [{} copies]", text, count)
                    } else {
                        text
                    }
                })
                .collect(),
        )
    }

    /// `{k1: v1, k2: v2}` in iteration order.
    pub fn render_entries<K: Debug, V: Debug>(&self, entries: &[(K, V)]) -> String {
        let rendered: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{:?}: {:?}", key, value))
            .collect();
        let listed = self.truncate(rendered);
        format!("{{{}}}", listed.join(", "))
    }

    fn render_rendered(&self, rendered: Vec<String>) -> String {
        format!("[{}]", self.truncate(rendered).join(", "))
    }

    fn truncate(&self, mut rendered: Vec<String>) -> Vec<String> {
        let limit = self.max_listed_elements.max(1);
        if rendered.len() > limit {
            let hidden = rendered.len() - limit;
            rendered.truncate(limit);
            rendered.push(format!("... ({} more)", hidden));
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list() {
        let config = FormatConfig::default();
        assert_eq!(config.render_list(&["UTF-8", "US-ASCII"]), r#"["UTF-8", "US-ASCII"]"#);
        assert_eq!(config.render_list::<i32>(&[]), "[]");
    }

    #[test]
    fn test_render_list_truncates() {
        let config = FormatConfig {
            max_listed_elements: 2,
            show_copy_counts: true,
        };
        assert_eq!(config.render_list(&[1, 2, 3, 4]), "[1, 2, ... (2 more)]");
    }

    #[test]
    fn test_render_counted_groups_duplicates() {
        let config = FormatConfig::default();
        assert_eq!(config.render_counted(&["a", "b", "a"]), r#"["a" [2 copies], "b"]"#);

        let plain = FormatConfig {
            show_copy_counts: false,
            ..FormatConfig::default()
        };
        assert_eq!(plain.render_counted(&["a", "b", "a"]), r#"["a", "b", "a"]"#);
    }

    #[test]
    fn test_render_entries() {
        let config = FormatConfig::default();
        assert_eq!(config.render_entries(&[("a", 1), ("b", 2)]), r#"{"a": 1, "b": 2}"#);
    }
}
