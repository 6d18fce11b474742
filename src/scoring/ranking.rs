use crate::corpus::CorpusStats;
use crate::text::TermCounts;
use crate::types::scoring::{ScoreDetails, TermWeight};

pub trait Scorer {
    fn score(&self, document: &TermCounts, corpus: &CorpusStats) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f64 {
        let score = details.score;
        debug_assert!(score.is_finite() && score >= 0.0, "score {score} is not a finite non-negative value");
        score
    }
}

/// Length-normalized TF times smoothed IDF, summed over distinct terms.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn score(&self, document: &TermCounts, corpus: &CorpusStats) -> ScoreDetails {
        let document_count = corpus.document_count();
        let total_terms = document.total();
        if total_terms == 0 {
            return ScoreDetails::empty(document_count);
        }

        let length = total_terms as f64;
        let mut score = 0.0;
        let mut matched_weight = 0.0;
        let mut terms = Vec::with_capacity(document.distinct());

        // TermCounts iterates in ascending term order; the summation order is fixed.
        for (term, count) in document.iter() {
            let document_frequency = corpus.document_frequency(term);
            let tf = count as f64 / length;
            let idf = corpus.inverse_document_frequency(term);
            let weight = tf * idf;

            score += weight;
            if document_frequency > 0 {
                matched_weight += weight;
            }

            terms.push(TermWeight {
                term: term.clone(),
                count,
                tf,
                document_frequency,
                idf,
                weight,
            });
        }

        ScoreDetails {
            terms,
            total_terms,
            document_count,
            score,
            matched_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Tokenizer;

    fn counts(text: &str) -> TermCounts {
        Tokenizer::default().term_counts(text).unwrap()
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let mut corpus = CorpusStats::new();
        corpus.add(&counts("hello world"));

        let details = TfIdfScorer.score(&counts(""), &corpus);
        assert_eq!(details.score, 0.0);
        assert_eq!(details.total_terms, 0);
        assert!(details.terms.is_empty());
    }

    #[test]
    fn test_single_term_equals_idf() {
        let mut corpus = CorpusStats::new();
        corpus.add(&counts("hello"));
        corpus.add(&counts("world"));

        let details = TfIdfScorer.score(&counts("hello"), &corpus);
        // TF = 1, IDF = ln(3/2) + 1
        assert_eq!(details.score, (3.0f64 / 2.0).ln() + 1.0);
        assert_eq!(details.matched_weight, details.score);
    }

    #[test]
    fn test_term_weights_sum_to_score() {
        let mut corpus = CorpusStats::new();
        corpus.add(&counts("a b c"));
        corpus.add(&counts("a"));

        let details = TfIdfScorer.score(&counts("a a b z"), &corpus);
        assert_eq!(details.total_terms, 4);
        assert_eq!(details.distinct_terms(), 3);

        let sum: f64 = details.terms.iter().map(|t| t.weight).sum();
        assert_eq!(sum, details.score);

        let a = &details.terms[0];
        assert_eq!(a.term.as_str(), "a");
        assert_eq!(a.count, 2);
        assert_eq!(a.tf, 0.5);
        assert_eq!(a.document_frequency, 2);

        let z = &details.terms[2];
        assert_eq!(z.term.as_str(), "z");
        assert_eq!(z.document_frequency, 0);
        assert_eq!(details.matched_weight, a.weight + details.terms[1].weight);
    }
}
