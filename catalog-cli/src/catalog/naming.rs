//! Identifier slugs, comparison keys and per-run id assignment

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::Record;

/// Id used when a name has no alphanumeric characters at all
pub const FALLBACK_SLUG: &str = "item";

static NON_SLUG_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());

/// Turn a display name into an identifier-safe slug
///
/// "Combat Knife" -> "combat-knife", "Caesar's Legion" -> "caesar-s-legion".
/// Names without any ASCII letters or digits yield [`FALLBACK_SLUG`].
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Comparison key for fuzzy name matching: lowercase ASCII letters and digits only
pub fn normalize(text: &str) -> String {
    NON_ALNUM.replace_all(&text.to_lowercase(), "").into_owned()
}

/// A record's id for this run, with the previous record it was paired with
#[derive(Debug)]
pub struct Assigned<'a, R> {
    pub id: String,
    /// Previous-run record whose id and curated fields this row inherits
    pub prior: Option<&'a R>,
}

/// Hands out ids for one collection during a single run
///
/// Names already present in the previous output keep their id. New names get
/// their slug, suffixed with `-2`, `-3`, ... when another record already owns it.
///
/// A name on several rows is paired with its previous records in id order
/// (shorter ids first, so `stimpak` before `stimpak-2` before `stimpak-10`),
/// which is the order fresh ids are handed out in. Re-running on the output
/// therefore pairs every row with the record it produced.
pub struct IdAllocator<'a, R> {
    prior: HashMap<&'a str, VecDeque<&'a R>>,
    reserved: HashSet<&'a str>,
    issued: HashSet<String>,
    seen_names: HashSet<String>,
}

impl<'a, R: Record> IdAllocator<'a, R> {
    pub fn new(prior: &'a [R]) -> Self {
        let mut by_name: HashMap<&str, Vec<&R>> = HashMap::new();
        for record in prior {
            by_name.entry(record.name()).or_default().push(record);
        }

        let prior: HashMap<&str, VecDeque<&R>> = by_name
            .into_iter()
            .map(|(name, mut records)| {
                records.sort_by(|a, b| id_order(a.id(), b.id()));
                (name, records.into_iter().collect())
            })
            .collect();

        // Every previous id stays reserved, duplicates included
        let reserved = prior_ids(&prior);

        Self {
            prior,
            reserved,
            issued: HashSet::new(),
            seen_names: HashSet::new(),
        }
    }

    /// Id for the next row named `name`
    pub fn assign(&mut self, name: &str) -> Assigned<'a, R> {
        if !self.seen_names.insert(name.to_string()) {
            log::warn!("Duplicate name '{}' in sheet, it will get a separate id", name);
        }

        let mut paired = None;
        if let Some(records) = self.prior.get_mut(name) {
            while let Some(record) = records.pop_front() {
                let id = record.id();
                if id.is_empty() {
                    // Keep its curated fields, regenerate the id
                    paired = Some(record);
                    break;
                }
                if self.issued.insert(id.to_string()) {
                    return Assigned {
                        id: id.to_string(),
                        prior: Some(record),
                    };
                }
            }
        }

        Assigned {
            id: self.fresh_id(name),
            prior: paired,
        }
    }

    fn fresh_id(&mut self, name: &str) -> String {
        let base = slugify(name);
        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.reserved.contains(candidate.as_str()) || self.issued.contains(&candidate) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        if candidate != base {
            log::info!("Id '{}' already taken, using '{}' for '{}'", base, candidate, name);
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}

fn prior_ids<'a, R: Record>(prior: &HashMap<&'a str, VecDeque<&'a R>>) -> HashSet<&'a str> {
    prior
        .values()
        .flatten()
        .map(|r| r.id())
        .filter(|id| !id.is_empty())
        .collect()
}

/// Shorter ids first, then lexical: "a" < "a-2" < "a-10"
fn id_order(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Item;

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Combat Knife"), "combat-knife");
        assert_eq!(slugify("  Caesar's Legion  "), "caesar-s-legion");
        assert_eq!(slugify("Pip-Boy 3000"), "pip-boy-3000");
        assert_eq!(slugify("--Power  Armor--"), "power-armor");
    }

    #[test]
    fn test_slugify_fallback() {
        assert_eq!(slugify("---"), FALLBACK_SLUG);
        assert_eq!(slugify(""), FALLBACK_SLUG);
        assert_eq!(slugify("ÆØÅ"), FALLBACK_SLUG);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Combat Knife"), "combatknife");
        assert_eq!(normalize(".44 Pistol!"), "44pistol");
        assert_eq!(normalize("  --- "), "");
    }

    #[test]
    fn test_prior_id_kept() {
        let prior = vec![item("knife-legacy", "Combat Knife")];
        let mut ids = IdAllocator::new(&prior);

        let knife = ids.assign("Combat Knife");
        assert_eq!(knife.id, "knife-legacy");
        assert_eq!(knife.prior, Some(&prior[0]));

        let bat = ids.assign("Baseball Bat");
        assert_eq!(bat.id, "baseball-bat");
        assert!(bat.prior.is_none());
    }

    #[test]
    fn test_empty_prior_id_regenerated() {
        let prior = vec![Item {
            cost: 3,
            ..item("", "Combat Knife")
        }];
        let mut ids = IdAllocator::new(&prior);

        let knife = ids.assign("Combat Knife");
        assert_eq!(knife.id, "combat-knife");
        assert_eq!(knife.prior.map(|p| p.cost), Some(3));
    }

    #[test]
    fn test_colliding_fresh_slugs_suffixed() {
        let prior: Vec<Item> = Vec::new();
        let mut ids = IdAllocator::new(&prior);

        assert_eq!(ids.assign("Pip-Boy").id, "pip-boy");
        assert_eq!(ids.assign("Pip Boy").id, "pip-boy-2");
        assert_eq!(ids.assign("PIP BOY!").id, "pip-boy-3");
    }

    #[test]
    fn test_fresh_slug_never_steals_prior_id() {
        // "Pip Boy" owns pip-boy from the last run but appears later in the sheet
        let prior = vec![item("pip-boy", "Pip Boy")];
        let mut ids = IdAllocator::new(&prior);

        assert_eq!(ids.assign("Pip-Boy").id, "pip-boy-2");
        assert_eq!(ids.assign("Pip Boy").id, "pip-boy");
    }

    #[test]
    fn test_duplicate_rows_get_distinct_ids() {
        let prior = vec![item("stimpak", "Stimpak")];
        let mut ids = IdAllocator::new(&prior);

        assert_eq!(ids.assign("Stimpak").id, "stimpak");
        assert_eq!(ids.assign("Stimpak").id, "stimpak-2");
    }

    #[test]
    fn test_duplicate_rows_pair_with_prior_records_in_id_order() {
        // Written sorted by primary, so the file order need not match row order
        let prior = vec![
            Item {
                cost: 2,
                ..item("stimpak-2", "Stimpak")
            },
            Item {
                cost: 1,
                ..item("stimpak", "Stimpak")
            },
        ];
        let mut ids = IdAllocator::new(&prior);

        let first = ids.assign("Stimpak");
        let second = ids.assign("Stimpak");
        assert_eq!(first.id, "stimpak");
        assert_eq!(first.prior.map(|p| p.cost), Some(1));
        assert_eq!(second.id, "stimpak-2");
        assert_eq!(second.prior.map(|p| p.cost), Some(2));

        // A third occurrence is new and must not reuse either reserved id
        assert_eq!(ids.assign("Stimpak").id, "stimpak-3");
    }

    #[test]
    fn test_double_digit_suffixes_keep_order() {
        let mut sorted = vec!["stimpak-10", "stimpak-2", "stimpak"];
        sorted.sort_by(|a, b| id_order(a, b));
        assert_eq!(sorted, vec!["stimpak", "stimpak-2", "stimpak-10"]);
    }
}
