use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

/// Trunk build output of the `ui` crate
#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = match uri.path().trim_start_matches('/') {
            "" => "index.html",
            path => path,
        };

        match Asset::get(path) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref().to_string())], content.data).into_response()
            }
            // Single-page app: unknown paths get the shell
            None => match Asset::get("index.html") {
                Some(content) => (
                    [(header::CONTENT_TYPE, "text/html".to_string())],
                    content.data,
                )
                    .into_response(),
                None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
            },
        }
    }
}
