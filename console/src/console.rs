use crate::backend::SearchBackend;
use crate::form::SearchForm;
use crate::upload::{normalize_upload, NormalizedImage};
use crate::view::{ConsoleView, ImagePolicy, Outcome};
use data::SearchRequest;
use log::{debug, error};

#[derive(Debug, Clone)]
pub struct ConsoleSettings {
    pub columns: usize,
    pub jpeg_quality: u8,
    pub image_policy: ImagePolicy,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            columns: 5,
            jpeg_quality: 75,
            image_policy: ImagePolicy::default(),
        }
    }
}

/// Only populated inputs make it into the request.
pub fn build_request(form: &SearchForm, image: Option<&NormalizedImage>) -> SearchRequest {
    let request = SearchRequest {
        query: form.query_text().map(str::to_owned),
        image_base64: image.map(|image| image.base64_jpeg.clone()),
    };
    debug_assert!(!request.is_empty(), "search request without query or image");
    request
}

/// Runs one interaction: form in, page model out. Every failure ends up in
/// the returned view; nothing is carried over from earlier submissions.
pub async fn submit<B: SearchBackend>(
    backend: &B,
    form: SearchForm,
    settings: &ConsoleSettings,
) -> ConsoleView {
    if !form.has_input() {
        debug!("search submitted without query or image, nothing to do");
        return ConsoleView::idle(form.query);
    }

    let normalized = match form
        .image
        .as_ref()
        .map(|upload| normalize_upload(upload, settings.jpeg_quality))
        .transpose()
    {
        Ok(normalized) => normalized,
        Err(err) => {
            error!("rejected upload: {err}");
            return ConsoleView::failed(form.query, err.to_string());
        }
    };

    let request = build_request(&form, normalized.as_ref());
    debug!(
        "Handle search with query {:?} and image {:?}",
        request.query,
        normalized.as_ref().map(|image| (image.width, image.height))
    );

    let outcome = match backend.search(&request).await {
        Ok(response) => Outcome::from_response(response, settings.columns, &settings.image_policy),
        Err(err) => {
            error!("search failed: {err}");
            Outcome::Failed(err.to_string())
        }
    };

    ConsoleView {
        query: form.query,
        preview: normalized.map(|image| image.preview),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{png_bytes, Reply, StubBackend};
    use crate::upload::ImageUpload;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use data::SearchResult;
    use image::GenericImageView;
    use reqwest::StatusCode;

    fn lake_png(width: u32, height: u32) -> ImageUpload {
        ImageUpload {
            file_name: String::from("lake.png"),
            bytes: png_bytes(width, height),
        }
    }

    #[tokio::test]
    async fn test_no_input_issues_no_call() {
        let backend = StubBackend::new(Reply::Results(vec![]));
        let view = submit(&backend, SearchForm::new("", None), &ConsoleSettings::default()).await;
        assert_eq!(view.outcome, Outcome::Idle);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_query_only_request() {
        let backend = StubBackend::new(Reply::Results(vec![SearchResult::new(
            "http://x/1.jpg",
            0.873,
        )]));
        let view = submit(
            &backend,
            SearchForm::new("serene lakes", None),
            &ConsoleSettings::default(),
        )
        .await;

        assert_eq!(
            backend.requests(),
            vec![SearchRequest {
                query: Some(String::from("serene lakes")),
                image_base64: None,
            }]
        );
        assert_eq!(view.query, "serene lakes");
        assert_eq!(view.preview, None);
        match view.outcome {
            Outcome::Results(grid) => assert_eq!(grid.cell_count(), 1),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "search request without query or image")]
    fn test_build_request_requires_input() {
        build_request(&SearchForm::default(), None);
    }

    #[tokio::test]
    async fn test_whitespace_query_is_forwarded_as_typed() {
        let backend = StubBackend::new(Reply::Results(vec![]));
        let view = submit(&backend, SearchForm::new("  ", None), &ConsoleSettings::default()).await;

        assert_eq!(
            backend.requests(),
            vec![SearchRequest {
                query: Some(String::from("  ")),
                image_base64: None,
            }]
        );
        assert_eq!(view.outcome, Outcome::NoResults);
    }

    #[tokio::test]
    async fn test_image_only_request() {
        let backend = StubBackend::new(Reply::Results(vec![]));
        let view = submit(
            &backend,
            SearchForm::new("", Some(lake_png(64, 48))),
            &ConsoleSettings::default(),
        )
        .await;

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, None);
        let jpeg = STANDARD
            .decode(requests[0].image_base64.as_ref().unwrap())
            .unwrap();
        assert_eq!(image::load_from_memory(&jpeg).unwrap().dimensions(), (64, 48));

        assert!(view.preview.unwrap().starts_with("data:image/png;base64,"));
        assert_eq!(view.outcome, Outcome::NoResults);
    }

    #[tokio::test]
    async fn test_query_and_image_together() {
        let backend = StubBackend::new(Reply::Results(vec![]));
        submit(
            &backend,
            SearchForm::new("mountains", Some(lake_png(8, 8))),
            &ConsoleSettings::default(),
        )
        .await;

        let requests = backend.requests();
        assert_eq!(requests[0].query.as_deref(), Some("mountains"));
        assert!(requests[0].image_base64.is_some());
    }

    #[tokio::test]
    async fn test_bad_upload_issues_no_call() {
        let backend = StubBackend::new(Reply::Results(vec![]));
        let upload = ImageUpload {
            file_name: String::from("clip.mp4"),
            bytes: vec![0; 16],
        };
        let view = submit(
            &backend,
            SearchForm::new("mountains", Some(upload)),
            &ConsoleSettings::default(),
        )
        .await;

        assert!(backend.requests().is_empty());
        assert!(matches!(view.outcome, Outcome::Failed(message) if message.contains("clip.mp4")));
    }

    #[tokio::test]
    async fn test_backend_failures_become_failed_outcome() {
        for reply in [
            Reply::Status(StatusCode::BAD_GATEWAY),
            Reply::Malformed,
        ] {
            let backend = StubBackend::new(reply);
            let view = submit(
                &backend,
                SearchForm::new("mountains", None),
                &ConsoleSettings::default(),
            )
            .await;
            assert_eq!(backend.requests().len(), 1);
            assert!(matches!(view.outcome, Outcome::Failed(_)));
        }
    }

    #[tokio::test]
    async fn test_status_failure_describes_status() {
        let backend = StubBackend::new(Reply::Status(StatusCode::BAD_GATEWAY));
        let view = submit(
            &backend,
            SearchForm::new("mountains", None),
            &ConsoleSettings::default(),
        )
        .await;
        assert_eq!(
            view.outcome,
            Outcome::Failed(String::from(
                "search backend answered with status 502 Bad Gateway"
            ))
        );
    }
}
