/// Management screens only search once the query has this many characters.
pub const MIN_QUERY_LEN: usize = 2;

pub fn is_active_query(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Case-insensitive substring match.
pub fn matches_query(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.trim().to_lowercase())
}
