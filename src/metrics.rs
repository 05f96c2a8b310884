//! Citation Metrics
//!
//! Client-side aggregation over the profile's publications: display
//! convenience over rows already held in memory.

use std::collections::BTreeMap;

use crate::models::Publication;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CitationSummary {
    pub publication_count: usize,
    pub total_citations: u64,
    pub h_index: usize,
    /// (year, publications that year), ascending by year
    pub by_year: Vec<(u16, usize)>,
}

/// Aggregate a publication list into the profile page's summary numbers.
pub fn summarize(publications: &[Publication]) -> CitationSummary {
    let mut citations: Vec<u32> = publications.iter().map(|p| p.citations).collect();
    citations.sort_unstable_by(|a, b| b.cmp(a));
    // h = largest rank where the rank-th paper still has >= rank citations
    let h_index = citations
        .iter()
        .enumerate()
        .take_while(|&(i, &c)| c as usize >= i + 1)
        .count();

    let mut by_year: BTreeMap<u16, usize> = BTreeMap::new();
    for publication in publications {
        *by_year.entry(publication.year).or_default() += 1;
    }

    CitationSummary {
        publication_count: publications.len(),
        total_citations: publications.iter().map(|p| p.citations as u64).sum(),
        h_index,
        by_year: by_year.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(id: u32, year: u16, citations: u32) -> Publication {
        Publication {
            id,
            title: format!("Paper {}", id),
            venue: "Journal of Examples".to_string(),
            year,
            citations,
            kind: "journal".to_string(),
        }
    }

    #[test]
    fn empty_profile_summarizes_to_zeroes() {
        assert_eq!(summarize(&[]), CitationSummary::default());
    }

    #[test]
    fn h_index_matches_hand_computed_cases() {
        // [10, 8, 5, 4, 3] -> h = 4
        let pubs: Vec<Publication> = [10, 8, 5, 4, 3]
            .iter()
            .enumerate()
            .map(|(i, &c)| publication(i as u32 + 1, 2020, c))
            .collect();
        assert_eq!(summarize(&pubs).h_index, 4);

        // Uncited papers contribute nothing.
        let uncited = vec![publication(1, 2021, 0), publication(2, 2022, 0)];
        assert_eq!(summarize(&uncited).h_index, 0);

        // One paper with many citations is still h = 1.
        assert_eq!(summarize(&[publication(1, 2019, 250)]).h_index, 1);
    }

    #[test]
    fn totals_and_year_buckets() {
        let pubs = vec![
            publication(1, 2022, 3),
            publication(2, 2020, 7),
            publication(3, 2022, 1),
        ];
        let summary = summarize(&pubs);
        assert_eq!(summary.publication_count, 3);
        assert_eq!(summary.total_citations, 11);
        assert_eq!(summary.by_year, vec![(2020, 1), (2022, 2)]);
    }
}
