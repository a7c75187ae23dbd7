use serde::Serialize;

// Envoltura estándar de respuestas de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_data_without_message() {
        let response = ApiResponse::success(42);
        assert!(response.success);
        assert!(response.message.is_none());
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_success_with_message() {
        let response = ApiResponse::success_with_message(1, "ok".to_string());
        assert_eq!(response.message.as_deref(), Some("ok"));
    }
}
