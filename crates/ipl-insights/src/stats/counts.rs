use serde::Serialize;
use std::collections::HashMap;

/// Size of every "top N" ranking on the dashboard.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Frequency table ordered by count descending, ties broken by label ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub entries: Vec<CategoryCount>,
}

impl Ranking {
    /// Counts each present value; `None` values are skipped.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in values.into_iter().flatten() {
            *counts.entry(value).or_default() += 1;
        }

        let mut entries: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(label, count)| CategoryCount {
                label: label.to_string(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        Self { entries }
    }

    pub fn top(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }

    pub fn leader(&self) -> Option<&CategoryCount> {
        self.entries.first()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// `part / whole` as a percentage, zero when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_fall_back_to_label_order() {
        let ranking =
            Ranking::from_values(["Pune", "Delhi", "Mumbai", "Delhi", "Pune", "Chennai"].map(Some));
        let labels: Vec<&str> = ranking
            .entries
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Delhi", "Pune", "Chennai", "Mumbai"]);
    }

    #[test]
    fn missing_values_are_not_counted() {
        let ranking = Ranking::from_values([Some("CSK"), None, Some("CSK"), None]);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.total(), 2);
        assert_eq!(ranking.count_of("CSK"), 2);
        assert_eq!(ranking.count_of("MI"), 0);
    }

    #[test]
    fn top_truncates_without_reordering() {
        let values: Vec<String> = (0..15).map(|i| format!("team-{i:02}")).collect();
        let ranking = Ranking::from_values(values.iter().map(|v| Some(v.as_str()))).top(TOP_N);
        assert_eq!(ranking.len(), TOP_N);
        assert_eq!(ranking.leader().map(|e| e.label.as_str()), Some("team-00"));
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(3, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
