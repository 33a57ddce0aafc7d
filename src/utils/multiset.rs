use log::debug;

/// Number of multisets of size `k` drawn from `choices` distinct values,
/// `C(choices - 1 + k, k)`. Saturates at `usize::MAX`.
pub fn multiset_count(choices: usize, k: usize) -> usize {
    if k == 0 {
        return 1;
    }
    if choices == 0 {
        return 0;
    }

    let n = (choices - 1) as u128;
    let mut count: u128 = 1;
    for i in 1..=k as u128 {
        // Each partial product is itself a binomial coefficient, so the
        // division is exact.
        count = match count.checked_mul(n + i) {
            Some(product) => product / i,
            None => return usize::MAX,
        };
    }
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Every non-decreasing extension of `prefix` up to `len` elements.
///
/// Positions after the prefix take values from `alphabet` in alphabet order,
/// each at least the previous one, so no two results are permutations of
/// each other. The prefix is copied verbatim and never reordered.
pub fn combinations_with_replacement<T: Copy>(
    prefix: &[T],
    len: usize,
    alphabet: &[T],
) -> Vec<Vec<T>> {
    if prefix.len() >= len {
        return vec![prefix.iter().take(len).copied().collect()];
    }
    if alphabet.is_empty() {
        return Vec::new();
    }

    let k = len - prefix.len();
    let mut results = Vec::with_capacity(multiset_count(alphabet.len(), k));
    let mut buffer = Vec::with_capacity(len);
    buffer.extend_from_slice(prefix);
    extend_combinations(&mut results, &mut buffer, len, 0, alphabet);

    debug!(
        "Generated {} multisets of length {} from {} values",
        results.len(),
        len,
        alphabet.len()
    );
    results
}

fn extend_combinations<T: Copy>(
    results: &mut Vec<Vec<T>>,
    buffer: &mut Vec<T>,
    len: usize,
    lowest: usize,
    alphabet: &[T],
) {
    if buffer.len() == len {
        results.push(buffer.clone());
        return;
    }
    for (index, &value) in alphabet.iter().enumerate().skip(lowest) {
        buffer.push(value);
        extend_combinations(results, buffer, len, index, alphabet);
        buffer.pop();
    }
}

/// Non-decreasing extensions of `prefix` with values in `[min, max]`.
///
/// Empty when `min > max`.
pub fn generate_multisets(prefix: &[u8], len: usize, min: u8, max: u8) -> Vec<Vec<u8>> {
    if min > max {
        return Vec::new();
    }
    let alphabet: Vec<u8> = (min..=max).collect();
    combinations_with_replacement(prefix, len, &alphabet)
}
