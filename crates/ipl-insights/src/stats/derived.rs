use crate::dataset::{MatchRecord, MatchTable};
use serde::Serialize;

/// Whether the side that won the toss also won the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TossAgreement {
    Won,
    Lost,
}

impl TossAgreement {
    /// A match without a winner counts as `Lost`.
    pub fn for_record(record: &MatchRecord) -> Self {
        match record.winner.as_deref() {
            Some(winner) if winner == record.toss_winner => Self::Won,
            _ => Self::Lost,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }
}

/// Per-row columns computed from the table, index-aligned with [`MatchTable::records`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedColumns {
    pub total_margin: Vec<u32>,
    pub toss_agreement: Vec<TossAgreement>,
}

impl DerivedColumns {
    pub fn compute(table: &MatchTable) -> Self {
        let records = table.records();
        Self {
            total_margin: records.iter().map(total_margin).collect(),
            toss_agreement: records.iter().map(TossAgreement::for_record).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.total_margin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_margin.is_empty()
    }
}

/// Runs plus wickets with missing treated as zero; at most one is normally set.
pub fn total_margin(record: &MatchRecord) -> u32 {
    record.runs_margin().saturating_add(record.wickets_margin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;

    #[test]
    fn total_margin_zero_fills_missing_values() {
        let by_wickets = RecordBuilder::new(2017).margins(Some(0), Some(5)).build();
        let by_runs = RecordBuilder::new(2017).margins(Some(97), None).build();
        let no_result = RecordBuilder::new(2017).margins(None, None).build();
        assert_eq!(total_margin(&by_wickets), 5);
        assert_eq!(total_margin(&by_runs), 97);
        assert_eq!(total_margin(&no_result), 0);
    }

    #[test]
    fn agreement_requires_matching_winner() {
        let won = RecordBuilder::new(2018).toss("CSK").winner(Some("CSK")).build();
        let lost = RecordBuilder::new(2018).toss("CSK").winner(Some("MI")).build();
        let abandoned = RecordBuilder::new(2018).toss("CSK").winner(None).build();
        assert_eq!(TossAgreement::for_record(&won), TossAgreement::Won);
        assert_eq!(TossAgreement::for_record(&lost), TossAgreement::Lost);
        assert_eq!(TossAgreement::for_record(&abandoned), TossAgreement::Lost);
    }

    #[test]
    fn columns_align_with_rows() {
        let table = MatchTable::new(vec![
            RecordBuilder::new(2019).margins(Some(14), None).build(),
            RecordBuilder::new(2019).margins(None, Some(7)).build(),
        ]);
        let derived = DerivedColumns::compute(&table);
        assert_eq!(derived.len(), table.len());
        assert_eq!(derived.total_margin, vec![14, 7]);
    }
}
