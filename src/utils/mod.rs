//! Utility functions and helpers

/// Join a base URL and a path with exactly one `/` between them.
///
/// ```
/// use gateway_reconciler::utils::join_url;
/// assert_eq!(join_url("http://lb.example.com/", "/iris"), "http://lb.example.com/iris");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}
