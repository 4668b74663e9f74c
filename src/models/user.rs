use serde::{Deserialize, Serialize};

/// Identificador numérico atribuído pelo `UserStore` (começa em 1, nunca reutilizado)
pub type UserId = i64;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Request para criar usuário. Os dois campos são obrigatórios e não podem ser vazios.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl CreateUserRequest {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Request para atualizar usuário.
///
/// Campo ausente, `null` ou `""` mantém o valor atual.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Alice Updated")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "alice.updated@example.com")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "User not found")]
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user = User { id: 1, name: "Alice".into(), email: "alice@example.com".into() };
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "name": "Alice", "email": "alice@example.com" })
        );
    }

    #[test]
    fn test_create_request_missing_field_is_incomplete() {
        let req: CreateUserRequest = serde_json::from_str(r#"{"name":"Incomplete"}"#).unwrap();
        assert!(!req.is_complete());

        let req: CreateUserRequest = serde_json::from_str(r#"{"name":"A","email":""}"#).unwrap();
        assert!(!req.is_complete());

        let req: CreateUserRequest = serde_json::from_str(r#"{"name":"A","email":"a@b.c"}"#).unwrap();
        assert!(req.is_complete());
    }

    #[test]
    fn test_update_request_accepts_null_and_missing() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.email.is_none());

        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
    }
}
