//! Reading-time estimate.

/// Count whitespace-separated tokens. Empty or blank text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Format the `"<N> min read"` estimate for `body`, rounding up.
///
/// A rate of zero is treated as one word per minute.
pub fn reading_time(body: &str, words_per_minute: u32) -> String {
    let rate = words_per_minute.max(1) as usize;
    let minutes = count_words(body).div_ceil(rate);
    format!("{minutes} min read")
}
