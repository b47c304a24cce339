//! TF-IDF cosine similarity over 1-2 word shingles.
//!
//! Pure Rust, no shared state: the vectorizer re-fits on the two input
//! documents each call, trading CPU for isolation between scoring requests.

use std::collections::HashMap;

/// Common English words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "we", "our", "they", "them", "their", "he", "she", "his", "her",
];

/// Fits a small TF-IDF model over exactly two documents and reports their
/// cosine similarity. The vocabulary is capped; when the cap bites, the most
/// frequent terms win, ties broken alphabetically.
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        TfidfVectorizer { max_features }
    }

    /// Cosine similarity of `left` and `right` in [0, 1], or `None` when
    /// either side yields no usable terms (empty text, stop words only).
    pub fn similarity(&self, left: &str, right: &str) -> Option<f64> {
        let left_terms = shingles(left);
        let right_terms = shingles(right);
        if left_terms.is_empty() || right_terms.is_empty() {
            return None;
        }

        // Corpus-wide term frequency drives vocabulary selection under the cap
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for term in left_terms.iter().chain(right_terms.iter()) {
            *corpus_freq.entry(term.as_str()).or_insert(0) += 1;
        }

        let mut vocabulary: Vec<&str> = corpus_freq.keys().copied().collect();
        vocabulary.sort_by(|a, b| corpus_freq[b].cmp(&corpus_freq[a]).then(a.cmp(b)));
        vocabulary.truncate(self.max_features);
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (*term, i))
            .collect();

        // Smoothed IDF over the two-document corpus
        let docs = [&left_terms, &right_terms];
        let mut idf = vec![0.0f64; index.len()];
        for (term, &i) in &index {
            let df = docs
                .iter()
                .filter(|doc| doc.iter().any(|t| t.as_str() == *term))
                .count() as f64;
            idf[i] = ((1.0 + docs.len() as f64) / (1.0 + df)).ln() + 1.0;
        }

        let left_vec = weighted_vector(&left_terms, &index, &idf)?;
        let right_vec = weighted_vector(&right_terms, &index, &idf)?;

        let dot: f64 = left_vec
            .iter()
            .zip(right_vec.iter())
            .map(|(a, b)| a * b)
            .sum();
        Some(dot.clamp(0.0, 1.0))
    }
}

/// Raw-count TF weighted by IDF and normalized to unit length. `None` when
/// no term of the document survives into the capped vocabulary.
fn weighted_vector(
    terms: &[String],
    index: &HashMap<&str, usize>,
    idf: &[f64],
) -> Option<Vec<f64>> {
    let mut vector = vec![0.0f64; idf.len()];
    for term in terms {
        if let Some(&i) = index.get(term.as_str()) {
            vector[i] += idf[i];
        }
    }

    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 {
        return None;
    }
    for x in vector.iter_mut() {
        *x /= norm;
    }
    Some(vector)
}

/// Lowercases, splits on non-alphanumeric characters, drops stop words and
/// single-character fragments, then emits unigrams plus adjacent bigrams.
fn shingles(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1)
        .filter(|w| !STOP_WORDS.contains(w))
        .collect();

    let mut grams: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        grams.push(format!("{} {}", pair[0], pair[1]));
    }
    grams
}
