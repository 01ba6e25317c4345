use crate::config::{Config, DEFAULT_LLM_API_URL, DEFAULT_LLM_MODEL};
use crate::error::Result;
use anyhow::Context as _;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = r#"You are an expert SQL Data Analyst. You have a table named 'candidates' with columns: name, nationality, major, experience_years, gender, city.

Your task is to convert the user's natural language query (which might be in Arabic or English) into a valid SQLite SQL query.

Rules:
1. Return ONLY the raw SQL query string. Do not use Markdown formatting like ```sql.
2. If the user's request is vague or missing critical filters (e.g., they just say 'I want an employee' or 'ابي موظف'), return a JSON object exactly like this: { "clarification_needed": "Ask a specific question in Arabic to narrow down the search" }
3. Ensure you handle Arabic text matching correctly (use LIKE for partial matches).
4. Always use SELECT * FROM candidates with appropriate WHERE clauses. Never select individual columns, join other tables, or modify data.
5. Common translations:
   - مهندس حاسب / هندسة حاسب = Computer Science or CS
   - الرياض = Riyadh
   - جدة = Jeddah
   - سعودي = Saudi
   - مصري = Egyptian
   - ذكر = Male
   - انثى = Female
   - تسويق = Marketing
   - علم نفس = Psychology
6. For experience queries, use experience_years with comparison operators.
7. If searching for a major, use LIKE '%keyword%' for flexible matching."#;

/// Turns a free-text search request into either SQL or a clarification
/// request. Implementations return the model's raw text untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryInterpreter: Send + Sync {
    async fn interpret(&self, query: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint (Groq by default).
#[derive(Clone)]
pub struct AIService {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AIService {
    pub fn new(api_key: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            api_url: DEFAULT_LLM_API_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 500,
        }
    }

    pub fn from_config(config: &Config, client: Client) -> Self {
        Self {
            client,
            api_key: config.groq_api_key.clone(),
            api_url: config.llm_api_url.clone(),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
        }
    }

    fn build_request<'a>(&'a self, query: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    async fn chat_completion(&self, query: &str) -> Result<String> {
        let res = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(query))
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(anyhow::anyhow!("LLM API Error {}: {}", status, text).into());
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).context("chat completion parse failed")?;
        completion_text(parsed).ok_or_else(|| anyhow::anyhow!("LLM returned empty content").into())
    }
}

fn completion_text(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

#[async_trait]
impl QueryInterpreter for AIService {
    async fn interpret(&self, query: &str) -> Result<String> {
        let reply = self.chat_completion(query).await?;
        tracing::debug!(model = %self.model, "AI response: {}", reply);
        Ok(reply)
    }
}
