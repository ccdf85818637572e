//! 1-based display indices and the resolver turning user text into them.
//!
//! An index list is written as positive integers separated by whitespace
//! and/or commas; `a-b` stands for every index from `a` to `b` inclusive:
//!
//! ```
//! use cake_collate_core::index::IndexList;
//!
//! let indices = IndexList::parse(" 1, 3-5 3")?;
//! let one_based: Vec<usize> = indices.iter().map(|index| index.one_based()).collect();
//! assert_eq!(one_based, vec![1, 3, 4, 5, 3]);
//! # Ok::<(), cake_collate_core::error::ParseError>(())
//! ```

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::error::ParseError;

/// Longest run of digits accepted as a single index.
///
/// Anything longer is treated as "not an index" by the resolver, which lets
/// the delete parser tell a huge but well-formed number apart from garbage.
pub const MAX_INDEX_DIGITS: usize = 10;

/// Most indices a single `a-b` range may expand to.
pub const MAX_RANGE_SPAN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    #[must_use]
    pub fn from_one_based(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    #[must_use]
    pub fn one_based(self) -> usize {
        self.0.get()
    }

    #[must_use]
    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }

    /// Parses a single index token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidIndex`] unless the trimmed token is a
    /// positive integer of at most [`MAX_INDEX_DIGITS`] digits.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let token = token.trim();
        let invalid = || ParseError::InvalidIndex(token.to_string());

        if token.is_empty()
            || token.len() > MAX_INDEX_DIGITS
            || !token.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        token
            .parse::<usize>()
            .ok()
            .and_then(Self::from_one_based)
            .ok_or_else(invalid)
    }
}

/// Indices in the order the user typed them. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexList(Vec<Index>);

impl IndexList {
    /// Parses indices separated by whitespace or commas. `a-b` expands to
    /// every index from `a` to `b`.
    ///
    /// # Arguments
    ///
    /// * `args` - Index text as typed, e.g. `1, 3-5 3`
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is blank, contains a token that is
    /// not a valid index, or contains a reversed or oversized range.
    pub fn parse(args: &str) -> Result<Self, ParseError> {
        let mut indices = Vec::new();

        for token in args
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            match token.split_once('-') {
                Some((start, end)) => indices.extend(parse_range(token, start, end)?),
                None => indices.push(Index::parse(token)?),
            }
        }

        if indices.is_empty() {
            return Err(ParseError::InvalidIndex(args.trim().to_string()));
        }

        Ok(Self(indices))
    }

    pub fn iter(&self) -> impl Iterator<Item = Index> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Picks the displayed entries the indices point at, each at most once, in typed order.
    ///
    /// Returns `None` as soon as one index is past the end of `displayed`.
    #[must_use]
    pub fn resolve<'a, T>(&self, displayed: &[&'a T]) -> Option<Vec<&'a T>> {
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(self.0.len());

        for index in self.iter() {
            let target = displayed.get(index.zero_based())?;
            if seen.insert(index) {
                targets.push(*target);
            }
        }

        Some(targets)
    }
}

fn parse_range(token: &str, start: &str, end: &str) -> Result<Vec<Index>, ParseError> {
    let start = Index::parse(start)?;
    let end = Index::parse(end)?;

    if start > end || end.one_based() - start.one_based() >= MAX_RANGE_SPAN {
        return Err(ParseError::InvalidIndexRange {
            range: token.to_string(),
            max_span: MAX_RANGE_SPAN,
        });
    }

    Ok((start.one_based()..=end.one_based())
        .filter_map(Index::from_one_based)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_based(list: &IndexList) -> Vec<usize> {
        list.iter().map(Index::one_based).collect()
    }

    #[test]
    fn test_index_conversions() {
        assert_eq!(Index::from_one_based(1).unwrap().one_based(), 1);
        assert_eq!(Index::from_one_based(5).unwrap().zero_based(), 4);
        assert!(Index::from_one_based(0).is_none());
    }

    #[test]
    fn test_parse_single_index() {
        assert_eq!(Index::parse(" 7 ").unwrap().one_based(), 7);
        assert_eq!(Index::parse("9999999999").unwrap().one_based(), 9_999_999_999);
    }

    #[test]
    fn test_parse_single_index_rejects() {
        for token in ["", "0", "-1", "+1", "1a", "1.5", "12345678901"] {
            assert!(
                matches!(Index::parse(token), Err(ParseError::InvalidIndex(_))),
                "`{token}` should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_list_separators() {
        assert_eq!(one_based(&IndexList::parse("1 2 3").unwrap()), vec![1, 2, 3]);
        assert_eq!(one_based(&IndexList::parse("1,2,3").unwrap()), vec![1, 2, 3]);
        assert_eq!(one_based(&IndexList::parse(" 3 , 1\t2 ").unwrap()), vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_list_keeps_duplicates() {
        let list = IndexList::parse("2 2 1").unwrap();
        assert_eq!(one_based(&list), vec![2, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_parse_list_ranges() {
        assert_eq!(one_based(&IndexList::parse("2-4").unwrap()), vec![2, 3, 4]);
        assert_eq!(one_based(&IndexList::parse("3-3, 1").unwrap()), vec![3, 1]);
        assert_eq!(IndexList::parse("1-1000").unwrap().len(), MAX_RANGE_SPAN);
    }

    #[test]
    fn test_parse_list_rejects() {
        assert!(IndexList::parse("").is_err());
        assert!(IndexList::parse("   ").is_err());
        assert!(IndexList::parse(" , ").is_err());
        assert!(IndexList::parse("1 a").is_err());
        assert!(IndexList::parse("1 0").is_err());
        assert!(IndexList::parse("-3").is_err());
        assert!(IndexList::parse("1-").is_err());
        assert!(IndexList::parse("1-2-3").is_err());
    }

    #[test]
    fn test_parse_list_rejects_bad_ranges() {
        assert!(matches!(
            IndexList::parse("4-2"),
            Err(ParseError::InvalidIndexRange { .. })
        ));
        assert!(matches!(
            IndexList::parse("1-1001"),
            Err(ParseError::InvalidIndexRange { .. })
        ));
    }

    #[test]
    fn test_resolve() {
        let values = ["a", "b", "c"];
        let displayed: Vec<&&str> = values.iter().collect();

        let list = IndexList::parse("3 1 3").unwrap();
        let targets = list.resolve(&displayed).unwrap();
        assert_eq!(targets, vec![&"c", &"a"]);

        assert!(IndexList::parse("1 4").unwrap().resolve(&displayed).is_none());
    }
}
