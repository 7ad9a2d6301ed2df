// Static asset hosting from the document root
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::path::Path;
use tower_http::services::ServeDir;

/// Serve files under `root` with content types guessed from the extension.
/// Paths that resolve to nothing get a plain 404.
pub fn static_service(root: &Path) -> ServeDir {
    ServeDir::new(root).append_index_html_on_directories(true)
}

/// Whether the document root ships its own landing page.
pub fn has_index_page(root: &Path) -> bool {
    root.join("index.html").is_file()
}

/// True when any path segment, after percent-decoding, starts with a dot.
pub fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        let decoded = urlencoding::decode(segment)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| segment.to_string());
        decoded.starts_with('.')
    })
}

/// Answer 404 for dotfiles and dot-directories (`.env`, `.git/...`) so the
/// document root never exposes them.
pub async fn hide_dotfiles(request: Request, next: Next) -> Response {
    if is_hidden_path(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "Refusing hidden path");
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_index_page() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_index_page(dir.path()));
        std::fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
        assert!(has_index_page(dir.path()));
    }

    #[test]
    fn test_hidden_paths() {
        assert!(is_hidden_path("/.env"));
        assert!(is_hidden_path("/.git/config"));
        assert!(is_hidden_path("/assets/.secret/key.pem"));
        assert!(is_hidden_path("/%2eenv"));
        assert!(!is_hidden_path("/"));
        assert!(!is_hidden_path("/index.html"));
        assert!(!is_hidden_path("/assets/site.v2.css"));
    }
}
