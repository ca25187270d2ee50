use super::counts::percentage;
use super::{DerivedColumns, TossAgreement};
use crate::dataset::{MatchTable, TossDecision};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TossDecisionShare {
    pub decision: TossDecision,
    pub count: usize,
    pub percentage: f64,
}

/// Matches per toss decision. Decisions that never occur are absent, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TossDecisionDistribution {
    pub shares: Vec<TossDecisionShare>,
}

impl TossDecisionDistribution {
    pub fn total(&self) -> usize {
        self.shares.iter().map(|share| share.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn count_of(&self, decision: &TossDecision) -> usize {
        self.share_of(decision).map(|share| share.count).unwrap_or(0)
    }

    pub fn percentage_of(&self, decision: &TossDecision) -> f64 {
        self.share_of(decision)
            .map(|share| share.percentage)
            .unwrap_or(0.0)
    }

    fn share_of(&self, decision: &TossDecision) -> Option<&TossDecisionShare> {
        self.shares.iter().find(|share| &share.decision == decision)
    }
}

pub fn toss_decision_distribution(table: &MatchTable) -> TossDecisionDistribution {
    let mut counts: BTreeMap<&TossDecision, usize> = BTreeMap::new();
    for decision in table.records().iter().filter_map(|r| r.toss_decision.as_ref()) {
        *counts.entry(decision).or_default() += 1;
    }

    let total: usize = counts.values().sum();
    let shares = counts
        .into_iter()
        .map(|(decision, count)| TossDecisionShare {
            decision: decision.clone(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    TossDecisionDistribution { shares }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TossAgreementCounts {
    pub won: usize,
    pub lost: usize,
}

impl TossAgreementCounts {
    pub fn total(&self) -> usize {
        self.won + self.lost
    }

    pub fn won_percentage(&self) -> f64 {
        percentage(self.won, self.total())
    }

    pub fn count(&self, agreement: TossAgreement) -> usize {
        match agreement {
            TossAgreement::Won => self.won,
            TossAgreement::Lost => self.lost,
        }
    }
}

pub fn toss_match_agreement(derived: &DerivedColumns) -> TossAgreementCounts {
    derived
        .toss_agreement
        .iter()
        .fold(TossAgreementCounts::default(), |mut counts, agreement| {
            match agreement {
                TossAgreement::Won => counts.won += 1,
                TossAgreement::Lost => counts.lost += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;

    #[test]
    fn absent_bat_category_reads_as_zero() {
        let table = MatchTable::new(vec![
            RecordBuilder::new(2019).decision(Some(TossDecision::Field)).build(),
            RecordBuilder::new(2019).decision(Some(TossDecision::Field)).build(),
            RecordBuilder::new(2019).decision(None).build(),
        ]);
        let distribution = toss_decision_distribution(&table);
        assert_eq!(distribution.shares.len(), 1);
        assert_eq!(distribution.count_of(&TossDecision::Bat), 0);
        assert_eq!(distribution.percentage_of(&TossDecision::Bat), 0.0);
        assert_eq!(distribution.count_of(&TossDecision::Field), 2);
        assert!((distribution.percentage_of(&TossDecision::Field) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_table_has_no_shares() {
        let distribution = toss_decision_distribution(&MatchTable::default());
        assert!(distribution.is_empty());
        assert_eq!(distribution.total(), 0);
    }

    #[test]
    fn agreement_partitions_rows() {
        let table = MatchTable::new(vec![
            RecordBuilder::new(2019).toss("KKR").winner(Some("KKR")).build(),
            RecordBuilder::new(2019).toss("KKR").winner(Some("RCB")).build(),
            RecordBuilder::new(2019).toss("RR").winner(None).build(),
            RecordBuilder::new(2019).toss("RR").winner(Some("RR")).build(),
        ]);
        let counts = toss_match_agreement(&DerivedColumns::compute(&table));
        assert_eq!(counts, TossAgreementCounts { won: 2, lost: 2 });
        assert_eq!(counts.total(), table.len());
        assert!((counts.won_percentage() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_agreement_percentage_is_zero() {
        assert_eq!(TossAgreementCounts::default().won_percentage(), 0.0);
    }
}
