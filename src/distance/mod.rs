//! Edit distances between byte strings.

/// Calculates the Levenshtein edit distance between byte strings.
///
/// Uses a two-row dynamic program over the shorter input, so the working
/// memory is proportional to `min(a.len(), b.len())`.
///
/// # Example
/// ```
/// use twine::distance::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein(b"", b"abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, &lb) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sb) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lb != sb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Calculates the Levenshtein edit distance with an early-exit budget.
///
/// Returns [`None`] as soon as the distance is known to exceed `bound`;
/// otherwise returns the exact distance. The bound is a budget, not a clamp:
/// a result of `Some(d)` always satisfies `d <= bound`.
///
/// # Example
/// ```
/// use twine::distance::levenshtein_bounded;
///
/// assert_eq!(levenshtein_bounded(b"kitten", b"sitting", 3), Some(3));
/// assert_eq!(levenshtein_bounded(b"kitten", b"sitting", 2), None);
/// ```
#[must_use]
pub fn levenshtein_bounded(a: &[u8], b: &[u8], bound: usize) -> Option<usize> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    // The length difference is a lower bound on the distance.
    if long.len() - short.len() > bound {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, &lb) in long.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &sb) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lb != sb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let cell = substitution.min(deletion).min(insertion);
            curr[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > bound {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[short.len()];
    (distance <= bound).then_some(distance)
}
