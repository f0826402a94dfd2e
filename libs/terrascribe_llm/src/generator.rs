use serde::{Deserialize, Serialize};

use crate::{prompts, sanitizer, CompletionClient, GenerationRequest};

pub const ERROR_PLACEHOLDER: &str = "# Error generating code. Please check the warnings above.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub code: String,
    pub ok: bool,
}

pub struct CodeGeneratorService {
    client: CompletionClient,
}

impl CodeGeneratorService {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// One-shot code generation. Identical requests may yield different text
    /// across calls; the low default temperature keeps the variance small.
    ///
    /// Remote failures never surface as errors: they are logged and the
    /// caller receives a placeholder result with `ok` unset.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let prompt = prompts::compose(request.dialect, &request.text);

        match self.client.complete(&prompt).await {
            Ok(text) => GenerationResult {
                code: sanitizer::strip_code_fences(&text),
                ok: true,
            },
            Err(e) => {
                log::error!("{} code generation failed: {:#}", request.dialect, e);
                log::warn!(
                    "Ensure your API credentials are configured and that access to the model has been granted for your account"
                );

                GenerationResult {
                    code: ERROR_PLACEHOLDER.to_string(),
                    ok: false,
                }
            }
        }
    }
}
