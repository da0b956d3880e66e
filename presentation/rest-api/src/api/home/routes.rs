use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

/// Serves the embedded front-end upload page.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Front-end page
    #[oai(path = "/", method = "get", tag = "ApiTags::Home")]
    async fn index(&self) -> Html<&'static str> {
        Html(include_str!("../../../public/index.html"))
    }
}
