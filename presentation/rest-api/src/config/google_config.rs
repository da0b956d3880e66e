/// Configuration for the Google API collaborators.
pub struct GoogleConfig {
    pub vision_api_key: String,
    pub gemini_api_key: String,
}

impl GoogleConfig {
    pub fn from_env() -> Self {
        let vision_api_key = std::env::var("VISION_API_KEY")
            .expect("VISION_API_KEY environment variable must be set");
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .expect("GEMINI_API_KEY environment variable must be set");
        Self {
            vision_api_key,
            gemini_api_key,
        }
    }
}
