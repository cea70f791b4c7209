use crate::*;
use mmx_core::*;
use rand::Rng;
use std::ops::RangeInclusive;

/// Non-empty leaf values, in the order the builder assigns them.
///
/// Parsed from comma-separated text (`"3, 12, 8"`) or sampled uniformly.
/// The [`Display`](std::fmt::Display) form parses back to the same values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaves(Vec<Value>);

impl Leaves {
    /// Sample `size` values uniformly from an inclusive range.
    pub fn sample<R>(size: usize, range: RangeInclusive<Value>, rng: &mut R) -> Result<Self, SearchError>
    where
        R: Rng,
    {
        if range.is_empty() {
            return Err(SearchError::InvalidInput(format!(
                "empty value range {}..={}",
                range.start(),
                range.end()
            )));
        }
        Self::try_from(
            (0..size)
                .map(|_| rng.random_range(range.clone()))
                .collect::<Vec<Value>>(),
        )
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn values(&self) -> &[Value] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter().copied()
    }
}

impl Arbitrary for Leaves {
    fn random() -> Self {
        Self::sample(
            RANDOM_TREE_SIZE,
            RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX,
            &mut rand::rng(),
        )
        .expect("default range is non-empty")
    }
}

impl Default for Leaves {
    fn default() -> Self {
        Self::try_from(DEFAULT_LEAVES).expect("default leaves parse")
    }
}

impl TryFrom<Vec<Value>> for Leaves {
    type Error = SearchError;
    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            Err(SearchError::InvalidInput("no leaf values".into()))
        } else {
            Ok(Self(values))
        }
    }
}

impl TryFrom<&str> for Leaves {
    type Error = SearchError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(SearchError::InvalidInput("no leaf values".into()));
        }
        s.split(LEAF_DELIMITER)
            .map(str::trim)
            .enumerate()
            .map(|(i, entry)| match entry {
                "" => Err(SearchError::InvalidInput(format!(
                    "empty entry at position {}",
                    i + 1
                ))),
                _ => entry.parse::<Value>().map_err(|_| {
                    SearchError::InvalidInput(format!("`{}` is not an integer", entry))
                }),
            })
            .collect::<Result<Vec<Value>, SearchError>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Leaves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .0
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    #[test]
    fn parses_trimmed_entries() {
        let leaves = Leaves::try_from(" 3,12 ,  -8,2 ").unwrap();
        assert_eq!(leaves.values(), &[3, 12, -8, 2]);
    }
    #[test]
    fn default_demo_input() {
        let leaves = Leaves::default();
        assert_eq!(leaves.len(), 16);
        assert_eq!(leaves.to_string(), DEFAULT_LEAVES);
    }
    #[test]
    fn rejects_blank_input() {
        assert!(matches!(
            Leaves::try_from("   "),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(matches!(
            Leaves::try_from(Vec::new()),
            Err(SearchError::InvalidInput(_))
        ));
    }
    #[test]
    fn rejects_bad_entries() {
        assert_eq!(
            Leaves::try_from("3, x, 4"),
            Err(SearchError::InvalidInput("`x` is not an integer".into()))
        );
        assert_eq!(
            Leaves::try_from("3,,4"),
            Err(SearchError::InvalidInput("empty entry at position 2".into()))
        );
        assert!(Leaves::try_from("3.5").is_err());
    }
    #[test]
    fn sampled_values_stay_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let leaves = Leaves::sample(64, 1..=15, rng).unwrap();
        assert_eq!(leaves.len(), 64);
        assert!(leaves.iter().all(|v| (1..=15).contains(&v)));
    }
    #[test]
    fn sampling_is_seeded() {
        let a = Leaves::sample(16, 1..=15, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = Leaves::sample(16, 1..=15, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
    #[test]
    fn sampling_rejects_degenerate_requests() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(Leaves::sample(0, 1..=15, rng).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 9..=2;
        assert!(Leaves::sample(4, empty, rng).is_err());
    }
    #[test]
    fn arbitrary_uses_default_shape() {
        let leaves = Leaves::random();
        assert_eq!(leaves.len(), RANDOM_TREE_SIZE);
        assert!(
            leaves
                .iter()
                .all(|v| (RANDOM_VALUE_MIN..=RANDOM_VALUE_MAX).contains(&v))
        );
    }
}
