#![allow(dead_code)]

use rowmap_core::{coerce, DbTemplate, Entity, Executor, FieldSpec, MappingError, Value};
use rowmap_sqlite::{db, SqliteExecutor};

/// Mirror of the mapped account table used across the integration tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
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

pub const CREATE_USER_TABLE: &str = "CREATE TABLE user (
    id INTEGER PRIMARY KEY,
    name TEXT,
    password TEXT,
    phone TEXT,
    is_delete INTEGER
)";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Template over a fresh in-memory database with the user table created.
pub fn setup_template() -> DbTemplate<SqliteExecutor> {
    init_tracing();
    let conn = db::open_in_memory().unwrap();
    let mut template = DbTemplate::new(SqliteExecutor::new(conn));
    template.executor().exec(CREATE_USER_TABLE, &[]).unwrap();
    template
}

pub fn sample_user() -> User {
    User {
        id: Some(222),
        name: Some("weng".into()),
        password: Some("12345".into()),
        phone_number: Some("1234589".into()),
        is_delete: Some(0),
    }
}
