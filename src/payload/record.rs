use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Contact, Payload, PayloadKind, SecurityKind, WifiNetwork};
use crate::common::{PayloadError, PayloadResult};

// Persisted record
//------------------------------------------------------------------------------

/// Flat, tagged shape a [`Payload`] is stored as. `kind` holds the discriminant
/// (`"type"` on the wire); only the keys of that variant are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadRecord {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    // WiFi
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,

    // vCard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&Payload> for PayloadRecord {
    fn from(payload: &Payload) -> Self {
        let kind = payload.kind().as_str().to_string();
        let some = |s: &String| Some(s.clone());
        match payload {
            Payload::Link { url } => Self { kind, url: some(url), ..Default::default() },
            Payload::Text { content } => Self { kind, content: some(content), ..Default::default() },
            Payload::Email { address, subject, body } => Self {
                kind,
                address: some(address),
                subject: some(subject),
                body: some(body),
                ..Default::default()
            },
            Payload::Phone { number } => Self { kind, number: some(number), ..Default::default() },
            Payload::WhatsApp { number, message } => {
                Self { kind, number: some(number), message: some(message), ..Default::default() }
            }
            Payload::WiFi(net) => Self {
                kind,
                ssid: some(&net.ssid),
                password: some(&net.password),
                is_hidden: Some(net.is_hidden),
                security: Some(net.security.token().to_string()),
                ..Default::default()
            },
            Payload::VCard(c) => Self {
                kind,
                first_name: some(&c.first_name),
                last_name: some(&c.last_name),
                organization: some(&c.organization),
                title: some(&c.title),
                phone: some(&c.phone),
                email: some(&c.email),
                address: some(&c.address),
                website: some(&c.website),
                note: some(&c.note),
                ..Default::default()
            },
        }
    }
}

impl From<Payload> for PayloadRecord {
    fn from(payload: Payload) -> Self {
        Self::from(&payload)
    }
}

impl TryFrom<PayloadRecord> for Payload {
    type Error = PayloadError;

    fn try_from(rec: PayloadRecord) -> PayloadResult<Self> {
        let Some(kind) = PayloadKind::from_tag(&rec.kind) else {
            warn!(target: "qrpayload::record", "Rejecting record with unknown type {:?}", rec.kind);
            return Err(PayloadError::UnknownPayloadType(rec.kind));
        };

        let payload = match kind {
            PayloadKind::Link => Self::Link { url: rec.url.unwrap_or_default() },
            PayloadKind::Text => Self::Text { content: rec.content.unwrap_or_default() },
            PayloadKind::Email => Self::Email {
                address: rec.address.unwrap_or_default(),
                subject: rec.subject.unwrap_or_default(),
                body: rec.body.unwrap_or_default(),
            },
            PayloadKind::Phone => Self::Phone { number: rec.number.unwrap_or_default() },
            PayloadKind::WhatsApp => Self::WhatsApp {
                number: rec.number.unwrap_or_default(),
                message: rec.message.unwrap_or_default(),
            },
            PayloadKind::WiFi => {
                let security = match rec.security {
                    Some(token) => SecurityKind::from_token(&token).ok_or_else(|| {
                        warn!(target: "qrpayload::record", "Rejecting wifi record with security {token:?}");
                        PayloadError::UnknownSecurity(token.clone())
                    })?,
                    None => SecurityKind::default(),
                };
                Self::WiFi(WifiNetwork {
                    ssid: rec.ssid.unwrap_or_default(),
                    password: rec.password.unwrap_or_default(),
                    is_hidden: rec.is_hidden.unwrap_or_default(),
                    security,
                })
            }
            PayloadKind::VCard => Self::VCard(Contact {
                first_name: rec.first_name.unwrap_or_default(),
                last_name: rec.last_name.unwrap_or_default(),
                organization: rec.organization.unwrap_or_default(),
                title: rec.title.unwrap_or_default(),
                phone: rec.phone.unwrap_or_default(),
                email: rec.email.unwrap_or_default(),
                address: rec.address.unwrap_or_default(),
                website: rec.website.unwrap_or_default(),
                note: rec.note.unwrap_or_default(),
            }),
        };
        Ok(payload)
    }
}
