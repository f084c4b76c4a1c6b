//! Per-style score accumulator.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::foundation::Style;

/// Non-negative integer score for each scoring style.
///
/// All three styles are always present (initialised to zero) and scores only
/// grow through [`ScoreVector::add`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreVector {
    scores: [u32; 3],
}

impl ScoreVector {
    /// All-zero vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` points to a style. Saturates instead of overflowing.
    pub fn add(&mut self, style: Style, delta: u32) {
        let slot = &mut self.scores[style.index()];
        *slot = slot.saturating_add(delta);
    }

    /// Returns a copy with `delta` points added to a style.
    pub fn with(mut self, style: Style, delta: u32) -> Self {
        self.add(style, delta);
        self
    }

    pub fn get(&self, style: Style) -> u32 {
        self.scores[style.index()]
    }

    /// Sum of all scores.
    pub fn total(&self) -> u64 {
        self.scores.iter().map(|&s| u64::from(s)).sum()
    }

    /// Highest score.
    pub fn max(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    /// Iterates styles and scores in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Style, u32)> + '_ {
        Style::ALL.into_iter().map(move |style| (style, self.get(style)))
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Style::ALL.len()))?;
        for (style, score) in self.iter() {
            map.serialize_entry(style.as_str(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_vector_is_all_zero() {
        let scores = ScoreVector::new();
        for style in Style::ALL {
            assert_eq!(scores.get(style), 0);
        }
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.max(), 0);
    }

    #[test]
    fn add_accumulates_per_style() {
        let mut scores = ScoreVector::new();
        scores.add(Style::Visual, 2);
        scores.add(Style::Visual, 1);
        scores.add(Style::Kinesthetic, 4);

        assert_eq!(scores.get(Style::Visual), 3);
        assert_eq!(scores.get(Style::Auditory), 0);
        assert_eq!(scores.get(Style::Kinesthetic), 4);
        assert_eq!(scores.total(), 7);
        assert_eq!(scores.max(), 4);
    }

    #[test]
    fn add_saturates() {
        let mut scores = ScoreVector::new().with(Style::Auditory, u32::MAX);
        scores.add(Style::Auditory, 10);
        assert_eq!(scores.get(Style::Auditory), u32::MAX);
    }

    #[test]
    fn serializes_as_style_map() {
        let scores = ScoreVector::new().with(Style::Visual, 2).with(Style::Auditory, 1);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"VISUAL": 2, "AUDITORY": 1, "KINESTHETIC": 0})
        );
    }

    fn any_style() -> impl Strategy<Value = Style> {
        prop::sample::select(Style::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn total_equals_sum_of_additions(
            adds in prop::collection::vec((any_style(), 0u32..1000), 0..50)
        ) {
            let mut scores = ScoreVector::new();
            let mut expected = 0u64;
            for (style, delta) in &adds {
                scores.add(*style, *delta);
                expected += u64::from(*delta);
            }
            prop_assert_eq!(scores.total(), expected);
            prop_assert_eq!(scores.iter().count(), 3);
        }
    }
}
