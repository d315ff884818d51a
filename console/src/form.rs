use crate::upload::ImageUpload;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use log::debug;

/// What one press of the search button carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub query: String,
    pub image: Option<ImageUpload>,
}

impl SearchForm {
    pub fn new(query: impl Into<String>, image: Option<ImageUpload>) -> Self {
        Self {
            query: query.into(),
            image,
        }
    }

    /// The query as typed, unless nothing was typed. Whitespace is a query.
    pub fn query_text(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.as_str())
        }
    }

    pub fn has_input(&self) -> bool {
        self.query_text().is_some() || self.image.is_some()
    }

    /// Reads the `query` and `image` fields of the console form. Browsers send
    /// an empty, nameless file part when no file was chosen; that counts as no
    /// image.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = SearchForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("query") => form.query = field.text().await?,
                Some("image") => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let bytes = field.bytes().await?;
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.image = Some(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                other => debug!("ignoring form field {other:?}"),
            }
        }
        Ok(form)
    }
}
