use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

use crate::app::{shell, App};

/// Page routes, with files under the site root served for every other path.
pub fn router(leptos_options: LeptosOptions) -> Router {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{self, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::content::Locale;
    use crate::gallery::PLACEHOLDER_IMAGE;

    fn test_router() -> Router {
        let options = LeptosOptions::builder()
            .output_name("portfolio-site")
            .site_root("public")
            .build();
        router(options)
    }

    async fn get(path: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::get(path).body(Body::empty()).expect("request");
        let response = test_router().oneshot(request).await.expect("response");
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_placeholder_is_served_from_site_root() {
        let (status, content_type, body) = get(PLACEHOLDER_IMAGE).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(body.contains("<svg"), "{body}");
    }

    #[tokio::test]
    async fn test_every_locale_has_a_page() {
        for locale in Locale::ALL {
            let (status, content_type, body) = get(locale.home_path()).await;
            assert_eq!(status, StatusCode::OK, "{}", locale.code());
            assert!(content_type.is_some_and(|t| t.starts_with("text/html")));
            assert!(
                body.contains(&format!("lang=\"{}\"", locale.code())),
                "{}",
                locale.code()
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, body) = get("/fr").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found."));
    }
}
