//! Splits a command's argument text into a preamble and prefixed values.
//!
//! In `1 n/Amy Bee t/friends t/vip` with prefixes `n/` and `t/`, the preamble
//! is `1`, `n/` maps to `["Amy Bee"]` and `t/` to `["friends", "vip"]`. A prefix
//! only counts at the start of the text or right after whitespace, so the `a/`
//! inside `n/Tina/Ian` is part of the name.

use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_ORDER_DESCRIPTION: Prefix = Prefix("o/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_DELIVERY_DATE: Prefix = Prefix("d/");
pub const PREFIX_REQUEST: Prefix = Prefix("r/");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: IndexMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    #[must_use]
    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.contains(*prefix))
    }
}

#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: IndexMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);

        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    let mut at_boundary = true;

    for (offset, c) in args.char_indices() {
        if at_boundary {
            if let Some(prefix) = prefixes
                .iter()
                .find(|prefix| args[offset..].starts_with(prefix.as_str()))
            {
                positions.push((offset, *prefix));
            }
        }
        at_boundary = c.is_whitespace();
    }

    positions
}
