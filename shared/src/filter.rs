use crate::Comment;

/// True when `needle` (already lowercased) occurs in the name, email or body.
fn matches(comment: &Comment, needle: &str) -> bool {
    [&comment.name, &comment.email, &comment.body]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keeps the comments whose name, email or body contains `search`,
/// ignoring case. Order is preserved; an empty search keeps everything.
pub fn filter_comments(comments: &[Comment], search: &str) -> Vec<Comment> {
    if search.is_empty() {
        return comments.to_vec();
    }

    let needle = search.to_lowercase();
    comments
        .iter()
        .filter(|comment| matches(comment, &needle))
        .cloned()
        .collect()
}
