// Class-name merging with last-write-wins conflict resolution

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// One input to [`merge_classes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassToken {
    /// One or more whitespace-separated class names.
    Text(String),
    /// Ordered class-name toggles; only entries set to `true` contribute.
    Toggles(Vec<(String, bool)>),
    /// The falsy case: contributes nothing.
    Off,
}

impl From<&str> for ClassToken {
    fn from(value: &str) -> Self {
        ClassToken::Text(value.to_string())
    }
}

impl From<String> for ClassToken {
    fn from(value: String) -> Self {
        ClassToken::Text(value)
    }
}

impl From<Option<&str>> for ClassToken {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(text) => ClassToken::Text(text.to_string()),
            None => ClassToken::Off,
        }
    }
}

impl From<&[(&str, bool)]> for ClassToken {
    fn from(entries: &[(&str, bool)]) -> Self {
        ClassToken::Toggles(
            entries
                .iter()
                .map(|(name, on)| (name.to_string(), *on))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassToken {
    fn from(entries: [(&str, bool); N]) -> Self {
        ClassToken::from(&entries[..])
    }
}

/// Utility namespaces whose members are mutually exclusive.
/// A class belongs to the longest table entry that prefixes it at a dash
/// boundary ("rounded-t-lg" groups under "rounded-t", not "rounded").
/// Classes matching no entry only collide with exact duplicates of themselves.
static CONFLICT_GROUPS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // spacing
        "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb", "ml", "gap",
        "gap-x", "gap-y", "space-x", "space-y",
        // sizing
        "w", "h", "min-w", "min-h", "max-w", "max-h", "size",
        // typography
        "text", "font", "leading", "tracking",
        // background and borders
        "bg", "border", "border-t", "border-r", "border-b", "border-l", "rounded", "rounded-t",
        "rounded-r", "rounded-b", "rounded-l",
        // layout and positioning
        "justify", "items", "content", "self", "top", "right", "bottom", "left", "inset",
        "inset-x", "inset-y", "z", "grid-cols", "grid-rows", "col-span", "row-span", "overflow",
        "overflow-x", "overflow-y",
        // effects and transitions
        "opacity", "shadow", "duration", "delay", "ease",
    ]
    .into_iter()
    .collect()
});

/// Conflict slot a class name occupies during the merge.
#[derive(PartialEq)]
enum Slot {
    Group(&'static str),
    Exact(String),
}

fn conflict_group(name: &str) -> Option<&'static str> {
    let mut end = name.len();
    while let Some(pos) = name[..end].rfind('-') {
        if let Some(&group) = CONFLICT_GROUPS.get(&name[..pos]) {
            return Some(group);
        }
        end = pos;
    }
    None
}

/// Merge a sequence of class tokens into one space-joined string.
///
/// Tokens flatten in input order: strings split on whitespace, toggle maps
/// contribute their enabled keys in declaration order, [`ClassToken::Off`]
/// contributes nothing. When two names share a conflict group the later one
/// wins; ungrouped names survive unless exactly duplicated, in which case the
/// last occurrence is kept.
pub fn merge_classes<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<ClassToken>,
{
    let mut flat: Vec<String> = Vec::new();
    for token in tokens {
        match token.into() {
            ClassToken::Text(text) => {
                flat.extend(text.split_whitespace().map(str::to_string));
            }
            ClassToken::Toggles(entries) => {
                flat.extend(
                    entries
                        .into_iter()
                        .filter(|(name, on)| *on && !name.is_empty())
                        .map(|(name, _)| name),
                );
            }
            ClassToken::Off => {}
        }
    }

    let mut names: Vec<String> = Vec::new();
    let mut slots: Vec<Slot> = Vec::new();
    for name in flat {
        let slot = match conflict_group(&name) {
            Some(group) => Slot::Group(group),
            None => Slot::Exact(name.clone()),
        };
        if let Some(pos) = slots.iter().position(|taken| *taken == slot) {
            names.remove(pos);
            slots.remove(pos);
        }
        names.push(name);
        slots.push(slot);
    }

    names.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_plain_strings() {
        assert_eq!(merge_classes(["text-sm", "font-bold"]), "text-sm font-bold");
    }

    #[test]
    fn test_later_class_wins_within_group() {
        assert_eq!(merge_classes(["text-sm", "text-lg"]), "text-lg");
        assert_eq!(merge_classes(["px-2", "px-4"]), "px-4");
    }

    #[test]
    fn test_falsy_tokens_are_ignored() {
        let merged = merge_classes([
            ClassToken::from("text-sm"),
            ClassToken::Off,
            ClassToken::from(None::<&str>),
            ClassToken::from(""),
            ClassToken::from("font-bold"),
        ]);
        assert_eq!(merged, "text-sm font-bold");
    }

    #[test]
    fn test_toggle_maps_contribute_enabled_keys() {
        let merged = merge_classes([
            ClassToken::from([("text-sm", true), ("text-lg", false)]),
            ClassToken::from("font-medium"),
        ]);
        assert_eq!(merged, "text-sm font-medium");
    }

    #[test]
    fn test_strings_split_on_whitespace() {
        assert_eq!(merge_classes(["flex  items-center", "px-2"]), "flex items-center px-2");
    }

    #[test]
    fn test_ungrouped_exact_duplicates_keep_last() {
        assert_eq!(merge_classes(["flex", "grow", "flex"]), "grow flex");
    }

    #[test]
    fn test_longest_group_prefix_wins() {
        // rounded-t-* and rounded-* are distinct groups
        assert_eq!(
            merge_classes(["rounded-t-lg", "rounded-md"]),
            "rounded-t-lg rounded-md"
        );
        assert_eq!(merge_classes(["rounded-t-lg", "rounded-t-sm"]), "rounded-t-sm");
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let tokens = || ["px-2", "text-sm", "px-4", "flex"];
        assert_eq!(merge_classes(tokens()), merge_classes(tokens()));
        assert_eq!(merge_classes(tokens()), "text-sm px-4 flex");
    }
}
