use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::style::{Style, StyleRecord};
use crate::common::{PayloadError, PayloadResult};
use crate::payload::{Payload, PayloadRecord};

// Stored code
//------------------------------------------------------------------------------

/// A payload the user saved, with its name and style. The id and creation time
/// are fixed at construction, everything else changes only through
/// [`StoredCode::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCode {
    id: Uuid,
    name: String,
    created_at: OffsetDateTime,
    payload: Payload,
    style: Style,
}

impl StoredCode {
    pub fn new(name: impl Into<String>, payload: Payload, style: Style) -> Self {
        Self::with_timestamp(name, payload, style, OffsetDateTime::now_utc())
    }

    pub(crate) fn with_timestamp(
        name: impl Into<String>,
        payload: Payload,
        style: Style,
        created_at: OffsetDateTime,
    ) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), created_at, payload, style }
    }

    pub fn update(&mut self, name: impl Into<String>, payload: Payload, style: Style) {
        self.name = name.into();
        self.payload = payload;
        self.style = style;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// String to hand to the QR encoder
    pub fn formatted_string(&self) -> String {
        self.payload.formatted_string()
    }
}

// Builder
//------------------------------------------------------------------------------

pub struct CodeBuilder {
    payload: Payload,
    name: Option<String>,
    style: Style,
    created_at: Option<OffsetDateTime>,
}

impl CodeBuilder {
    pub fn new(payload: Payload) -> Self {
        Self { payload, name: None, style: Style::default(), created_at: None }
    }

    pub fn payload(&mut self, payload: Payload) -> &mut Self {
        self.payload = payload;
        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn unset_name(&mut self) -> &mut Self {
        self.name = None;
        self
    }

    pub fn style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    pub fn created_at(&mut self, created_at: OffsetDateTime) -> &mut Self {
        self.created_at = Some(created_at);
        self
    }

    /// Blank or missing names are replaced by [`Payload::default_name`].
    pub fn build(&self) -> StoredCode {
        let created_at = self.created_at.unwrap_or_else(OffsetDateTime::now_utc);
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.payload.default_name(created_at),
        };
        StoredCode::with_timestamp(name, self.payload.clone(), self.style, created_at)
    }
}

// Persisted record
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCodeRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub payload: PayloadRecord,
    pub style: StyleRecord,
}

impl From<&StoredCode> for StoredCodeRecord {
    fn from(code: &StoredCode) -> Self {
        Self {
            id: code.id,
            name: code.name.clone(),
            created_at: code.created_at,
            payload: PayloadRecord::from(&code.payload),
            style: StyleRecord::from(&code.style),
        }
    }
}

impl TryFrom<StoredCodeRecord> for StoredCode {
    type Error = PayloadError;

    fn try_from(rec: StoredCodeRecord) -> PayloadResult<Self> {
        Ok(Self {
            id: rec.id,
            name: rec.name,
            created_at: rec.created_at,
            payload: Payload::try_from(rec.payload)?,
            style: Style::try_from(rec.style)?,
        })
    }
}
