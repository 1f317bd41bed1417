use serde::{Deserialize, Serialize};

/// Код ошибки, возвращаемой мутацией в списке `errors`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    GraphqlError,
    Invalid,
    NotFound,
    Required,
    Unique,
    DuplicatedInputItem,
    AttributeAlreadyAssigned,
}

impl ErrorCode {
    /// Текст по умолчанию, если сервер не прислал сообщение
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::GraphqlError => "Ошибка запроса",
            ErrorCode::Invalid => "Некорректное значение",
            ErrorCode::NotFound => "Объект не найден",
            ErrorCode::Required => "Обязательное поле",
            ErrorCode::Unique => "Значение должно быть уникальным",
            ErrorCode::DuplicatedInputItem => "Значение указано несколько раз",
            ErrorCode::AttributeAlreadyAssigned => "Атрибут уже назначен",
        }
    }
}

/// Ошибка валидации поля или формы целиком (`field == None`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Option<String>,
    pub code: ErrorCode,
    pub message: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            field: Some(field.into()),
            code,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Ошибка транспорта или неожиданный ответ сервера
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            field: None,
            code: ErrorCode::GraphqlError,
            message: Some(message.into()),
        }
    }

    pub fn text(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.code.default_message().to_string())
    }
}

/// Найти первую ошибку для конкретного поля формы
pub fn error_for_field<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a FieldError> {
    errors.iter().find(|e| e.field.as_deref() == Some(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_format() {
        let json = serde_json::to_string(&ErrorCode::AttributeAlreadyAssigned).unwrap();
        assert_eq!(json, "\"ATTRIBUTE_ALREADY_ASSIGNED\"");
        let code: ErrorCode = serde_json::from_str("\"GRAPHQL_ERROR\"").unwrap();
        assert_eq!(code, ErrorCode::GraphqlError);
    }

    #[test]
    fn test_text_falls_back_to_code_message() {
        let err = FieldError::new("name", ErrorCode::Required);
        assert_eq!(err.text(), "Обязательное поле");
        let err = err.with_message("Name is required");
        assert_eq!(err.text(), "Name is required");
    }

    #[test]
    fn test_error_for_field() {
        let errors = vec![
            FieldError::transport("boom"),
            FieldError::new("name", ErrorCode::Unique),
        ];
        assert_eq!(
            error_for_field(&errors, "name").map(|e| e.code),
            Some(ErrorCode::Unique)
        );
        assert!(error_for_field(&errors, "slug").is_none());
    }
}
