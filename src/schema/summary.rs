#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseSummary {
    pub flows: usize,
    pub processes: usize,
    pub total_entities: usize,
}

impl DatabaseSummary {
    pub fn from_counts(flows: usize, processes: usize) -> Self {
        Self {
            flows,
            processes,
            total_entities: flows + processes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_counts() {
        let summary = DatabaseSummary::from_counts(3, 4);
        assert_eq!(summary.total_entities, 7);
        assert_eq!(DatabaseSummary::from_counts(0, 0), DatabaseSummary::default());
    }
}
