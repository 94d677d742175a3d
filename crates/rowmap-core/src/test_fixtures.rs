//! Shared entity fixtures for unit tests.

use crate::entity::{coerce, Entity, FieldSpec};
use crate::errors::MappingError;
use crate::value::Value;

/// Plain account type: key by the `id` naming convention, one annotated
/// column (`phone_number` stored as `phone`).
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub is_delete: Option<i64>,
}

impl Entity for User {
    const QUALIFIED_NAME: &'static str = "dao::User";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::plain("id"),
            FieldSpec::plain("name"),
            FieldSpec::plain("password"),
            FieldSpec::renamed("phone_number", "phone"),
            FieldSpec::plain("is_delete"),
        ];
        FIELDS
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => self.id.map(Value::from),
            "name" => self.name.clone().map(Value::from),
            "password" => self.password.clone().map(Value::from),
            "phone_number" => self.phone_number.clone().map(Value::from),
            "is_delete" => self.is_delete.map(Value::from),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), MappingError> {
        match field {
            "id" => self.id = coerce::<Self, _>("id", value)?,
            "name" => self.name = coerce::<Self, _>("name", value)?,
            "password" => self.password = coerce::<Self, _>("password", value)?,
            "phone_number" => self.phone_number = coerce::<Self, _>("phone_number", value)?,
            "is_delete" => self.is_delete = coerce::<Self, _>("is_delete", value)?,
            other => return Err(MappingError::unknown_field(Self::QUALIFIED_NAME, other)),
        }
        Ok(())
    }
}

/// Explicit table name plus an annotated primary key not named `id`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Session {
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub expires_at: Option<i64>,
}

impl Entity for Session {
    const QUALIFIED_NAME: &'static str = "dao::Session";
    const TABLE: Option<&'static str> = Some("auth_sessions");

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::key("token", "token"),
            FieldSpec::plain("user_id"),
            FieldSpec::plain("expires_at"),
        ];
        FIELDS
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "token" => self.token.clone().map(Value::from),
            "user_id" => self.user_id.map(Value::from),
            "expires_at" => self.expires_at.map(Value::from),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), MappingError> {
        match field {
            "token" => self.token = coerce::<Self, _>("token", value)?,
            "user_id" => self.user_id = coerce::<Self, _>("user_id", value)?,
            "expires_at" => self.expires_at = coerce::<Self, _>("expires_at", value)?,
            other => return Err(MappingError::unknown_field(Self::QUALIFIED_NAME, other)),
        }
        Ok(())
    }
}

/// No primary key at all; key-requiring operations must fail on it.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct AuditNote {
    pub body: Option<String>,
    pub author: Option<String>,
}

impl Entity for AuditNote {
    const QUALIFIED_NAME: &'static str = "dao::AuditNote";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::plain("body"), FieldSpec::plain("author")];
        FIELDS
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "body" => self.body.clone().map(Value::from),
            "author" => self.author.clone().map(Value::from),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), MappingError> {
        match field {
            "body" => self.body = coerce::<Self, _>("body", value)?,
            "author" => self.author = coerce::<Self, _>("author", value)?,
            other => return Err(MappingError::unknown_field(Self::QUALIFIED_NAME, other)),
        }
        Ok(())
    }
}
