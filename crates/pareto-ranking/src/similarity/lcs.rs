use crate::text::normalize;

/// Longest common contiguous substring of two texts.
///
/// Both inputs are normalized first and compared char by char with an
/// O(n·m) dynamic-programming table kept as two rolling rows. On ties the
/// first maximal match in row-major scan order wins. Returns the substring
/// and its length in chars.
pub fn longest_common_substring(s1: &str, s2: &str) -> (String, usize) {
    let a: Vec<char> = normalize(s1).chars().collect();
    let b: Vec<char> = normalize(s2).chars().collect();
    let (best_len, best_end) = lcs_table(&a, &b);
    if best_len == 0 {
        return (String::new(), 0);
    }
    (a[best_end - best_len..best_end].iter().collect(), best_len)
}

/// LCS length divided by the longer normalized text's length, in [0.0, 1.0].
///
/// Two empty texts are identical (1.0); exactly one empty text scores 0.0.
pub fn lcs_similarity(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = normalize(s1).chars().collect();
    let b: Vec<char> = normalize(s2).chars().collect();
    lcs_similarity_chars(&a, &b)
}

/// [`lcs_similarity`] over pre-normalized char sequences.
pub fn lcs_similarity_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (len, _) = lcs_table(a, b);
    len as f64 / a.len().max(b.len()) as f64
}

/// Returns (length, end index in `a`) of the first longest common substring.
fn lcs_table(a: &[char], b: &[char]) -> (usize, usize) {
    if a.is_empty() || b.is_empty() {
        return (0, 0);
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best_len = 0;
    let mut best_end = 0;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
                if curr[j] > best_len {
                    best_len = curr[j];
                    best_end = i;
                }
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_len, best_end)
}
