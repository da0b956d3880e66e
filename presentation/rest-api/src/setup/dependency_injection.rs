use std::sync::Arc;

use logger::TracingLogger;

use google::gemini::CompletionGeneratorGemini;
use google::vision::TextRecognizerVision;

use business::application::receipt::scan_receipt::ScanReceiptUseCaseImpl;

use crate::config::google_config::GoogleConfig;

pub struct DependencyContainer {
    pub home_api: crate::api::home::routes::Api,
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub fn new(google_config: &GoogleConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let home_api = crate::api::home::routes::Api::new();
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let recognizer = Arc::new(TextRecognizerVision::new(
            google_config.vision_api_key.clone(),
        ));
        let completer = Arc::new(CompletionGeneratorGemini::new(
            google_config.gemini_api_key.clone(),
        ));

        // Receipt use cases
        let scan_receipt_use_case = Arc::new(ScanReceiptUseCaseImpl {
            recognizer,
            completer,
            logger,
        });

        let receipt_api = crate::api::receipt::routes::ReceiptApi::new(scan_receipt_use_case);

        Self {
            home_api,
            health_api,
            receipt_api,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wiring must work from the supplied config alone; reading env vars here
    // would panic in this test environment where no keys are set.
    #[test]
    fn should_wire_container_from_config_without_touching_the_environment() {
        let config = GoogleConfig {
            vision_api_key: "vision-key".to_string(),
            gemini_api_key: "gemini-key".to_string(),
        };

        let container = DependencyContainer::new(&config);

        let _ = container.receipt_api;
    }
}
