#[derive(Debug, thiserror::Error)]
pub enum VitwiError {
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("API configuration missing: {0}")]
    ConfigMissing(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No JSON object found in model reply")]
    NoJsonFound,

    #[error("JSON parse error: {0}")]
    JsonParse(#[source] serde_json::Error),

    #[error("Incomplete data: {0}")]
    IncompleteData(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl VitwiError {
    /// Whether re-triggering the same action may succeed.
    ///
    /// Model output is not guaranteed to be well-formed, so every failure that
    /// happens after the request left the process is worth another attempt.
    /// Input and configuration problems are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VitwiError::Api { .. }
                | VitwiError::Http(_)
                | VitwiError::MalformedResponse(_)
                | VitwiError::NoJsonFound
                | VitwiError::JsonParse(_)
                | VitwiError::IncompleteData(_)
        )
    }

    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            VitwiError::EmptyInput(what) => format!("{what} не может быть пустым"),
            VitwiError::ConfigMissing(_) => {
                "Пожалуйста, настройте API ключ OpenRouter".to_string()
            }
            VitwiError::Api { status, message } => {
                format!("Ошибка API: {status} - {message}")
            }
            VitwiError::MalformedResponse(_) => "Неверный формат ответа от API".to_string(),
            VitwiError::NoJsonFound => "Не удалось найти JSON в ответе".to_string(),
            VitwiError::JsonParse(_) => {
                "Ошибка парсинга ответа от нейросети. Попробуйте еще раз.".to_string()
            }
            VitwiError::IncompleteData(_) => "Неполные данные в ответе".to_string(),
            VitwiError::Http(e) => format!("Ошибка сети: {e}"),
            VitwiError::Io(_) | VitwiError::Serialize(_) => {
                "Не удалось сохранить данные".to_string()
            }
            VitwiError::InvalidArgument(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VitwiError>;
