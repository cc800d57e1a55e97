use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// LLM providers a team can configure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LlmProvider {
    OpenAi,
    Anthropic,
    AzureOpenAi,
    Bedrock,
    VertexAi,
    Ollama,
}

/// What a configured model is used for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelCategory {
    Chat,
    Embedding,
    Rerank,
}

/// One model in a team's configured list.
///
/// `priority` ranks selection order (1 = highest). `None` means the model
/// was configured before ranking existed or a concurrent edit dropped it;
/// reordering repairs either case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LlmModelRef {
    pub id: Uuid,
    pub provider: LlmProvider,
    pub model_category: ModelCategory,
    pub model_name: String,
    pub priority: Option<u32>,
}
