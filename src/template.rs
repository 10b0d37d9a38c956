use crate::keys::{UNIVERSAL_CHECKLIST, UNIVERSAL_RATING_CATEGORIES};
use crate::storage::{read_json, write_json, KeyValueStore};
use tracing::info;

/// The two global, date-independent name lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Checklist,
    RatingCategories,
}

impl TemplateKind {
    pub fn key(self) -> &'static str {
        match self {
            TemplateKind::Checklist => UNIVERSAL_CHECKLIST,
            TemplateKind::RatingCategories => UNIVERSAL_RATING_CATEGORIES,
        }
    }
}

/// Returns the template in display order. A missing (or unreadable) template
/// is initialized to an empty list and persisted.
pub fn load_template<S: KeyValueStore + ?Sized>(store: &mut S, kind: TemplateKind) -> Vec<String> {
    match read_json(store, kind.key()) {
        Some(names) => names,
        None => {
            write_json(store, kind.key(), &Vec::<String>::new());
            Vec::new()
        }
    }
}

/// Appends `name` after trimming. Blank input is ignored; duplicates are kept.
/// Returns the trimmed name when something was appended.
pub fn append_to_template<S: KeyValueStore + ?Sized>(
    store: &mut S,
    kind: TemplateKind,
    name: &str,
) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut names = load_template(store, kind);
    names.push(name.to_string());
    write_json(store, kind.key(), &names);
    info!(template = kind.key(), len = names.len(), "appended {name:?}");
    Some(name.to_string())
}
