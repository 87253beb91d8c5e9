// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `gen_ai`, `openai` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Free-form description of the GenAI agent provided by the application.
///
/// Type: `string`. Examples: `"Helps with math problems"`, `"Generates fiction stories"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_AGENT_DESCRIPTION: &str = "gen_ai.agent.description";

/// The unique identifier of the GenAI agent.
///
/// Type: `string`. Examples: `"asst_5j66UpCpwteGg4YSxUnt7lPY"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_AGENT_ID: &str = "gen_ai.agent.id";

/// Human-readable name of the GenAI agent provided by the application.
///
/// Type: `string`. Examples: `"Math Tutor"`, `"Fiction Writer"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_AGENT_NAME: &str = "gen_ai.agent.name";

/// Deprecated, use Event API to report completions contents.
///
/// Type: `string`. Examples: `[{'role': 'assistant', 'content': 'The capital of France is Paris.'}]`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no replacement at this time.")]
pub const GEN_AI_COMPLETION: &str = "gen_ai.completion";

/// The unique identifier for a conversation (session, thread), used to store and correlate messages within this conversation.
///
/// Type: `string`. Examples: `"conv_5j66UpCpwteGg4YSxUnt7lPY"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_CONVERSATION_ID: &str = "gen_ai.conversation.id";

/// The data source identifier.
///
/// Type: `string`. Examples: `"H7STPQYOND"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_DATA_SOURCE_ID: &str = "gen_ai.data_source.id";

/// Deprecated, use `gen_ai.output.type`.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gen_ai.output.type`.")]
pub const GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT: &str = "gen_ai.openai.request.response_format";

/// Text response format
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT_VALUE_TEXT: &str = "text";

/// JSON object response format
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT_VALUE_JSON_OBJECT: &str = "json_object";

/// JSON schema response format
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT_VALUE_JSON_SCHEMA: &str = "json_schema";

/// Deprecated, use `gen_ai.request.seed`.
///
/// Type: `int`. Examples: `100`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gen_ai.request.seed`.")]
pub const GEN_AI_OPENAI_REQUEST_SEED: &str = "gen_ai.openai.request.seed";

/// Deprecated, use `openai.request.service_tier`.
///
/// Type: `string`. Examples: `"auto"`, `"default"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `openai.request.service_tier`.")]
pub const GEN_AI_OPENAI_REQUEST_SERVICE_TIER: &str = "gen_ai.openai.request.service_tier";

/// The system will utilize scale tier credits until they are exhausted.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPENAI_REQUEST_SERVICE_TIER_VALUE_AUTO: &str = "auto";

/// The system will utilize the default scale tier.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPENAI_REQUEST_SERVICE_TIER_VALUE_DEFAULT: &str = "default";

/// Deprecated, use `openai.response.service_tier`.
///
/// Type: `string`. Examples: `"scale"`, `"default"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `openai.response.service_tier`.")]
pub const GEN_AI_OPENAI_RESPONSE_SERVICE_TIER: &str = "gen_ai.openai.response.service_tier";

/// Deprecated, use `openai.response.system_fingerprint`.
///
/// Type: `string`. Examples: `"fp_44709d6fcb"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `openai.response.system_fingerprint`.")]
pub const GEN_AI_OPENAI_RESPONSE_SYSTEM_FINGERPRINT: &str =
    "gen_ai.openai.response.system_fingerprint";

/// The name of the operation being performed.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// Chat completion operation such as OpenAI Chat API
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_CHAT: &str = "chat";

/// Multimodal content generation operation such as Gemini Generate Content
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_GENERATE_CONTENT: &str = "generate_content";

/// Text completions operation such as OpenAI Completions API (Legacy)
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_TEXT_COMPLETION: &str = "text_completion";

/// Embeddings operation such as OpenAI Create embeddings API
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_EMBEDDINGS: &str = "embeddings";

/// Create GenAI agent
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_CREATE_AGENT: &str = "create_agent";

/// Invoke GenAI agent
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_INVOKE_AGENT: &str = "invoke_agent";

/// Execute a tool
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OPERATION_NAME_VALUE_EXECUTE_TOOL: &str = "execute_tool";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GEN_AI_OPERATION_NAME`].
    GenAiOperationName for GEN_AI_OPERATION_NAME {
        /// Chat completion operation such as OpenAI Chat API
        Chat = "chat",
        /// Multimodal content generation operation such as Gemini Generate Content
        GenerateContent = "generate_content",
        /// Text completions operation such as OpenAI Completions API (Legacy)
        TextCompletion = "text_completion",
        /// Embeddings operation such as OpenAI Create embeddings API
        Embeddings = "embeddings",
        /// Create GenAI agent
        CreateAgent = "create_agent",
        /// Invoke GenAI agent
        InvokeAgent = "invoke_agent",
        /// Execute a tool
        ExecuteTool = "execute_tool",
    }
}

/// Represents the content type requested by the client.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OUTPUT_TYPE: &str = "gen_ai.output.type";

/// Plain text
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OUTPUT_TYPE_VALUE_TEXT: &str = "text";

/// JSON object with known or unknown schema
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OUTPUT_TYPE_VALUE_JSON: &str = "json";

/// Image
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OUTPUT_TYPE_VALUE_IMAGE: &str = "image";

/// Speech
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_OUTPUT_TYPE_VALUE_SPEECH: &str = "speech";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GEN_AI_OUTPUT_TYPE`].
    GenAiOutputType for GEN_AI_OUTPUT_TYPE {
        /// Plain text
        Text = "text",
        /// JSON object with known or unknown schema
        Json = "json",
        /// Image
        Image = "image",
        /// Speech
        Speech = "speech",
    }
}

/// Deprecated, use Event API to report prompt contents.
///
/// Type: `string`. Examples: `[{'role': 'user', 'content': 'What is the capital of France?'}]`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed, no replacement at this time.")]
pub const GEN_AI_PROMPT: &str = "gen_ai.prompt";

/// The target number of candidate completions to return.
///
/// Type: `int`. Examples: `3`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_CHOICE_COUNT: &str = "gen_ai.request.choice.count";

/// The encoding formats requested in an embeddings operation, if specified.
///
/// Type: `string[]`. Examples: `["base64"]`, `["float", "binary"]`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_ENCODING_FORMATS: &str = "gen_ai.request.encoding_formats";

/// The frequency penalty setting for the GenAI request.
///
/// Type: `double`. Examples: `0.1`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_FREQUENCY_PENALTY: &str = "gen_ai.request.frequency_penalty";

/// The maximum number of tokens the model generates for a request.
///
/// Type: `int`. Examples: `100`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_MAX_TOKENS: &str = "gen_ai.request.max_tokens";

/// The name of the GenAI model a request is being made to.
///
/// Type: `string`. Examples: `"gpt-4"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// The presence penalty setting for the GenAI request.
///
/// Type: `double`. Examples: `0.1`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_PRESENCE_PENALTY: &str = "gen_ai.request.presence_penalty";

/// Requests with same seed value more likely to return same result.
///
/// Type: `int`. Examples: `100`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_SEED: &str = "gen_ai.request.seed";

/// List of sequences that the model will use to stop generating further tokens.
///
/// Type: `string[]`. Examples: `["forest", "lived"]`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_STOP_SEQUENCES: &str = "gen_ai.request.stop_sequences";

/// The temperature setting for the GenAI request.
///
/// Type: `double`. Examples: `0.0`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_TEMPERATURE: &str = "gen_ai.request.temperature";

/// The top_k sampling setting for the GenAI request.
///
/// Type: `double`. Examples: `1.0`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_TOP_K: &str = "gen_ai.request.top_k";

/// The top_p sampling setting for the GenAI request.
///
/// Type: `double`. Examples: `1.0`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_REQUEST_TOP_P: &str = "gen_ai.request.top_p";

/// Array of reasons the model stopped generating tokens, corresponding to each generation received.
///
/// Type: `string[]`. Examples: `["stop"]`, `["stop", "length"]`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

/// The unique identifier for the completion.
///
/// Type: `string`. Examples: `"chatcmpl-123"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_RESPONSE_ID: &str = "gen_ai.response.id";

/// The name of the model that generated the response.
///
/// Type: `string`. Examples: `"gpt-4-0613"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_RESPONSE_MODEL: &str = "gen_ai.response.model";

/// The Generative AI product as identified by the client or server instrumentation.
///
/// Type: `string`. Examples: `"openai"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM: &str = "gen_ai.system";

/// OpenAI
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_OPENAI: &str = "openai";

/// Any Google generative AI endpoint
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_GCP_GEN_AI: &str = "gcp.gen_ai";

/// Vertex AI
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_GCP_VERTEX_AI: &str = "gcp.vertex_ai";

/// Gemini
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_GCP_GEMINI: &str = "gcp.gemini";

/// Vertex AI
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gcp.vertex_ai`.")]
pub const GEN_AI_SYSTEM_VALUE_VERTEX_AI: &str = "vertex_ai";

/// Gemini
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gcp.gemini`.")]
pub const GEN_AI_SYSTEM_VALUE_GEMINI: &str = "gemini";

/// Anthropic
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_ANTHROPIC: &str = "anthropic";

/// Cohere
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_COHERE: &str = "cohere";

/// Azure AI Inference
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_AZ_AI_INFERENCE: &str = "az.ai.inference";

/// Azure OpenAI
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_AZ_AI_OPENAI: &str = "az.ai.openai";

/// IBM Watsonx AI
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_IBM_WATSONX_AI: &str = "ibm.watsonx.ai";

/// AWS Bedrock
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_AWS_BEDROCK: &str = "aws.bedrock";

/// Perplexity
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_PERPLEXITY: &str = "perplexity";

/// xAI
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_XAI: &str = "xai";

/// DeepSeek
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_DEEPSEEK: &str = "deepseek";

/// Groq
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_GROQ: &str = "groq";

/// Mistral AI
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SYSTEM_VALUE_MISTRAL_AI: &str = "mistral_ai";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GEN_AI_SYSTEM`].
    GenAiSystem for GEN_AI_SYSTEM {
        /// OpenAI
        Openai = "openai",
        /// Any Google generative AI endpoint
        GcpGenAi = "gcp.gen_ai",
        /// Vertex AI
        GcpVertexAi = "gcp.vertex_ai",
        /// Gemini
        GcpGemini = "gcp.gemini",
        /// Vertex AI
        ///
        /// Deprecated: Replaced by `gcp.vertex_ai`.
        VertexAi = "vertex_ai",
        /// Gemini
        ///
        /// Deprecated: Replaced by `gcp.gemini`.
        Gemini = "gemini",
        /// Anthropic
        Anthropic = "anthropic",
        /// Cohere
        Cohere = "cohere",
        /// Azure AI Inference
        AzAiInference = "az.ai.inference",
        /// Azure OpenAI
        AzAiOpenai = "az.ai.openai",
        /// IBM Watsonx AI
        IbmWatsonxAi = "ibm.watsonx.ai",
        /// AWS Bedrock
        AwsBedrock = "aws.bedrock",
        /// Perplexity
        Perplexity = "perplexity",
        /// xAI
        Xai = "xai",
        /// DeepSeek
        Deepseek = "deepseek",
        /// Groq
        Groq = "groq",
        /// Mistral AI
        MistralAi = "mistral_ai",
    }
}

/// The type of token being counted.
///
/// Type: `string`. Examples: `"input"`, `"output"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOKEN_TYPE: &str = "gen_ai.token.type";

/// Input tokens (prompt, input, etc.)
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOKEN_TYPE_VALUE_INPUT: &str = "input";

/// Output tokens (completion, response, etc.)
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOKEN_TYPE_VALUE_OUTPUT: &str = "output";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GEN_AI_TOKEN_TYPE`].
    GenAiTokenType for GEN_AI_TOKEN_TYPE {
        /// Input tokens (prompt, input, etc.)
        Input = "input",
        /// Output tokens (completion, response, etc.)
        Output = "output",
    }
}

/// The tool call identifier.
///
/// Type: `string`. Examples: `"call_mszuSIzqtI65i1wAUOE8w5H4"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOOL_CALL_ID: &str = "gen_ai.tool.call.id";

/// The tool description.
///
/// Type: `string`. Examples: `"Multiply two numbers"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOOL_DESCRIPTION: &str = "gen_ai.tool.description";

/// Name of the tool utilized by the agent.
///
/// Type: `string`. Examples: `"Flights"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOOL_NAME: &str = "gen_ai.tool.name";

/// Type of the tool utilized by the agent
///
/// Type: `string`. Examples: `"function"`, `"extension"`, `"datastore"`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_TOOL_TYPE: &str = "gen_ai.tool.type";

/// Deprecated, use `gen_ai.usage.output_tokens` instead.
///
/// Type: `int`. Examples: `42`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gen_ai.usage.output_tokens`.")]
pub const GEN_AI_USAGE_COMPLETION_TOKENS: &str = "gen_ai.usage.completion_tokens";

/// The number of tokens used in the GenAI input (prompt).
///
/// Type: `int`. Examples: `100`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of tokens used in the GenAI response (completion).
///
/// Type: `int`. Examples: `180`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// Deprecated, use `gen_ai.usage.input_tokens` instead.
///
/// Type: `int`. Examples: `42`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gen_ai.usage.input_tokens`.")]
pub const GEN_AI_USAGE_PROMPT_TOKENS: &str = "gen_ai.usage.prompt_tokens";

/// The service tier requested. May be a specific tier, default, or auto.
///
/// Type: `string`. Examples: `"auto"`, `"default"`.
#[cfg(feature = "semconv_experimental")]
pub const OPENAI_REQUEST_SERVICE_TIER: &str = "openai.request.service_tier";

/// The system will utilize scale tier credits until they are exhausted.
#[cfg(feature = "semconv_experimental")]
pub const OPENAI_REQUEST_SERVICE_TIER_VALUE_AUTO: &str = "auto";

/// The system will utilize the default scale tier.
#[cfg(feature = "semconv_experimental")]
pub const OPENAI_REQUEST_SERVICE_TIER_VALUE_DEFAULT: &str = "default";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`OPENAI_REQUEST_SERVICE_TIER`].
    OpenaiRequestServiceTier for OPENAI_REQUEST_SERVICE_TIER {
        /// The system will utilize scale tier credits until they are exhausted.
        Auto = "auto",
        /// The system will utilize the default scale tier.
        Default = "default",
    }
}

/// The service tier used for the response.
///
/// Type: `string`. Examples: `"scale"`, `"default"`.
#[cfg(feature = "semconv_experimental")]
pub const OPENAI_RESPONSE_SERVICE_TIER: &str = "openai.response.service_tier";

/// A fingerprint to track any eventual change in the Generative AI environment.
///
/// Type: `string`. Examples: `"fp_44709d6fcb"`.
#[cfg(feature = "semconv_experimental")]
pub const OPENAI_RESPONSE_SYSTEM_FINGERPRINT: &str = "openai.response.system_fingerprint";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("GEN_AI_AGENT_DESCRIPTION", "gen_ai.agent.description", Experimental),
    Entry::attribute("GEN_AI_AGENT_ID", "gen_ai.agent.id", Experimental),
    Entry::attribute("GEN_AI_AGENT_NAME", "gen_ai.agent.name", Experimental),
    Entry::attribute("GEN_AI_COMPLETION", "gen_ai.completion", Experimental).deprecated(Obsoleted),
    Entry::attribute("GEN_AI_CONVERSATION_ID", "gen_ai.conversation.id", Experimental),
    Entry::attribute("GEN_AI_DATA_SOURCE_ID", "gen_ai.data_source.id", Experimental),
    Entry::attribute(
        "GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT",
        "gen_ai.openai.request.response_format",
        Experimental,
    )
    .deprecated(Renamed("gen_ai.output.type")),
    Entry::value(
        "GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT_VALUE_TEXT",
        "gen_ai.openai.request.response_format",
        "text",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT_VALUE_JSON_OBJECT",
        "gen_ai.openai.request.response_format",
        "json_object",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPENAI_REQUEST_RESPONSE_FORMAT_VALUE_JSON_SCHEMA",
        "gen_ai.openai.request.response_format",
        "json_schema",
        Experimental,
    ),
    Entry::attribute("GEN_AI_OPENAI_REQUEST_SEED", "gen_ai.openai.request.seed", Experimental)
        .deprecated(Renamed("gen_ai.request.seed")),
    Entry::attribute(
        "GEN_AI_OPENAI_REQUEST_SERVICE_TIER",
        "gen_ai.openai.request.service_tier",
        Experimental,
    )
    .deprecated(Renamed("openai.request.service_tier")),
    Entry::value(
        "GEN_AI_OPENAI_REQUEST_SERVICE_TIER_VALUE_AUTO",
        "gen_ai.openai.request.service_tier",
        "auto",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPENAI_REQUEST_SERVICE_TIER_VALUE_DEFAULT",
        "gen_ai.openai.request.service_tier",
        "default",
        Experimental,
    ),
    Entry::attribute(
        "GEN_AI_OPENAI_RESPONSE_SERVICE_TIER",
        "gen_ai.openai.response.service_tier",
        Experimental,
    )
    .deprecated(Renamed("openai.response.service_tier")),
    Entry::attribute(
        "GEN_AI_OPENAI_RESPONSE_SYSTEM_FINGERPRINT",
        "gen_ai.openai.response.system_fingerprint",
        Experimental,
    )
    .deprecated(Renamed("openai.response.system_fingerprint")),
    Entry::attribute("GEN_AI_OPERATION_NAME", "gen_ai.operation.name", Experimental),
    Entry::value("GEN_AI_OPERATION_NAME_VALUE_CHAT", "gen_ai.operation.name", "chat", Experimental),
    Entry::value(
        "GEN_AI_OPERATION_NAME_VALUE_GENERATE_CONTENT",
        "gen_ai.operation.name",
        "generate_content",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPERATION_NAME_VALUE_TEXT_COMPLETION",
        "gen_ai.operation.name",
        "text_completion",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPERATION_NAME_VALUE_EMBEDDINGS",
        "gen_ai.operation.name",
        "embeddings",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPERATION_NAME_VALUE_CREATE_AGENT",
        "gen_ai.operation.name",
        "create_agent",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPERATION_NAME_VALUE_INVOKE_AGENT",
        "gen_ai.operation.name",
        "invoke_agent",
        Experimental,
    ),
    Entry::value(
        "GEN_AI_OPERATION_NAME_VALUE_EXECUTE_TOOL",
        "gen_ai.operation.name",
        "execute_tool",
        Experimental,
    ),
    Entry::attribute("GEN_AI_OUTPUT_TYPE", "gen_ai.output.type", Experimental),
    Entry::value("GEN_AI_OUTPUT_TYPE_VALUE_TEXT", "gen_ai.output.type", "text", Experimental),
    Entry::value("GEN_AI_OUTPUT_TYPE_VALUE_JSON", "gen_ai.output.type", "json", Experimental),
    Entry::value("GEN_AI_OUTPUT_TYPE_VALUE_IMAGE", "gen_ai.output.type", "image", Experimental),
    Entry::value("GEN_AI_OUTPUT_TYPE_VALUE_SPEECH", "gen_ai.output.type", "speech", Experimental),
    Entry::attribute("GEN_AI_PROMPT", "gen_ai.prompt", Experimental).deprecated(Obsoleted),
    Entry::attribute("GEN_AI_REQUEST_CHOICE_COUNT", "gen_ai.request.choice.count", Experimental),
    Entry::attribute(
        "GEN_AI_REQUEST_ENCODING_FORMATS",
        "gen_ai.request.encoding_formats",
        Experimental,
    ),
    Entry::attribute(
        "GEN_AI_REQUEST_FREQUENCY_PENALTY",
        "gen_ai.request.frequency_penalty",
        Experimental,
    ),
    Entry::attribute("GEN_AI_REQUEST_MAX_TOKENS", "gen_ai.request.max_tokens", Experimental),
    Entry::attribute("GEN_AI_REQUEST_MODEL", "gen_ai.request.model", Experimental),
    Entry::attribute(
        "GEN_AI_REQUEST_PRESENCE_PENALTY",
        "gen_ai.request.presence_penalty",
        Experimental,
    ),
    Entry::attribute("GEN_AI_REQUEST_SEED", "gen_ai.request.seed", Experimental),
    Entry::attribute(
        "GEN_AI_REQUEST_STOP_SEQUENCES",
        "gen_ai.request.stop_sequences",
        Experimental,
    ),
    Entry::attribute("GEN_AI_REQUEST_TEMPERATURE", "gen_ai.request.temperature", Experimental),
    Entry::attribute("GEN_AI_REQUEST_TOP_K", "gen_ai.request.top_k", Experimental),
    Entry::attribute("GEN_AI_REQUEST_TOP_P", "gen_ai.request.top_p", Experimental),
    Entry::attribute(
        "GEN_AI_RESPONSE_FINISH_REASONS",
        "gen_ai.response.finish_reasons",
        Experimental,
    ),
    Entry::attribute("GEN_AI_RESPONSE_ID", "gen_ai.response.id", Experimental),
    Entry::attribute("GEN_AI_RESPONSE_MODEL", "gen_ai.response.model", Experimental),
    Entry::attribute("GEN_AI_SYSTEM", "gen_ai.system", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_OPENAI", "gen_ai.system", "openai", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_GCP_GEN_AI", "gen_ai.system", "gcp.gen_ai", Experimental),
    Entry::value(
        "GEN_AI_SYSTEM_VALUE_GCP_VERTEX_AI",
        "gen_ai.system",
        "gcp.vertex_ai",
        Experimental,
    ),
    Entry::value("GEN_AI_SYSTEM_VALUE_GCP_GEMINI", "gen_ai.system", "gcp.gemini", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_VERTEX_AI", "gen_ai.system", "vertex_ai", Experimental)
        .deprecated(Renamed("gcp.vertex_ai")),
    Entry::value("GEN_AI_SYSTEM_VALUE_GEMINI", "gen_ai.system", "gemini", Experimental)
        .deprecated(Renamed("gcp.gemini")),
    Entry::value("GEN_AI_SYSTEM_VALUE_ANTHROPIC", "gen_ai.system", "anthropic", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_COHERE", "gen_ai.system", "cohere", Experimental),
    Entry::value(
        "GEN_AI_SYSTEM_VALUE_AZ_AI_INFERENCE",
        "gen_ai.system",
        "az.ai.inference",
        Experimental,
    ),
    Entry::value("GEN_AI_SYSTEM_VALUE_AZ_AI_OPENAI", "gen_ai.system", "az.ai.openai", Experimental),
    Entry::value(
        "GEN_AI_SYSTEM_VALUE_IBM_WATSONX_AI",
        "gen_ai.system",
        "ibm.watsonx.ai",
        Experimental,
    ),
    Entry::value("GEN_AI_SYSTEM_VALUE_AWS_BEDROCK", "gen_ai.system", "aws.bedrock", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_PERPLEXITY", "gen_ai.system", "perplexity", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_XAI", "gen_ai.system", "xai", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_DEEPSEEK", "gen_ai.system", "deepseek", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_GROQ", "gen_ai.system", "groq", Experimental),
    Entry::value("GEN_AI_SYSTEM_VALUE_MISTRAL_AI", "gen_ai.system", "mistral_ai", Experimental),
    Entry::attribute("GEN_AI_TOKEN_TYPE", "gen_ai.token.type", Experimental),
    Entry::value("GEN_AI_TOKEN_TYPE_VALUE_INPUT", "gen_ai.token.type", "input", Experimental),
    Entry::value("GEN_AI_TOKEN_TYPE_VALUE_OUTPUT", "gen_ai.token.type", "output", Experimental),
    Entry::attribute("GEN_AI_TOOL_CALL_ID", "gen_ai.tool.call.id", Experimental),
    Entry::attribute("GEN_AI_TOOL_DESCRIPTION", "gen_ai.tool.description", Experimental),
    Entry::attribute("GEN_AI_TOOL_NAME", "gen_ai.tool.name", Experimental),
    Entry::attribute("GEN_AI_TOOL_TYPE", "gen_ai.tool.type", Experimental),
    Entry::attribute(
        "GEN_AI_USAGE_COMPLETION_TOKENS",
        "gen_ai.usage.completion_tokens",
        Experimental,
    )
    .deprecated(Renamed("gen_ai.usage.output_tokens")),
    Entry::attribute("GEN_AI_USAGE_INPUT_TOKENS", "gen_ai.usage.input_tokens", Experimental),
    Entry::attribute("GEN_AI_USAGE_OUTPUT_TOKENS", "gen_ai.usage.output_tokens", Experimental),
    Entry::attribute("GEN_AI_USAGE_PROMPT_TOKENS", "gen_ai.usage.prompt_tokens", Experimental)
        .deprecated(Renamed("gen_ai.usage.input_tokens")),
    Entry::attribute("OPENAI_REQUEST_SERVICE_TIER", "openai.request.service_tier", Experimental),
    Entry::value(
        "OPENAI_REQUEST_SERVICE_TIER_VALUE_AUTO",
        "openai.request.service_tier",
        "auto",
        Experimental,
    ),
    Entry::value(
        "OPENAI_REQUEST_SERVICE_TIER_VALUE_DEFAULT",
        "openai.request.service_tier",
        "default",
        Experimental,
    ),
    Entry::attribute("OPENAI_RESPONSE_SERVICE_TIER", "openai.response.service_tier", Experimental),
    Entry::attribute(
        "OPENAI_RESPONSE_SYSTEM_FINGERPRINT",
        "openai.response.system_fingerprint",
        Experimental,
    ),
];
