mod classify;
mod format;
mod name;
mod record;

pub use classify::{classify, classify_bytes};
pub use record::PayloadRecord;

use std::fmt::{Display, Error, Formatter};

// Payload
//------------------------------------------------------------------------------

/// Content carried by a QR code. Each variant formats into the string a scanner
/// app expects, see [`Payload::formatted_string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    Link { url: String },
    Text { content: String },
    Email { address: String, subject: String, body: String },
    Phone { number: String },
    WhatsApp { number: String, message: String },
    WiFi(WifiNetwork),
    VCard(Contact),
}

impl Payload {
    pub fn link(url: impl Into<String>) -> Self {
        Self::Link { url: url.into() }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text { content: content.into() }
    }

    pub fn email(
        address: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::Email { address: address.into(), subject: subject.into(), body: body.into() }
    }

    pub fn phone(number: impl Into<String>) -> Self {
        Self::Phone { number: number.into() }
    }

    pub fn whatsapp(number: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WhatsApp { number: number.into(), message: message.into() }
    }

    pub fn wifi(
        ssid: impl Into<String>,
        password: impl Into<String>,
        is_hidden: bool,
        security: SecurityKind,
    ) -> Self {
        Self::WiFi(WifiNetwork { ssid: ssid.into(), password: password.into(), is_hidden, security })
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Link { .. } => PayloadKind::Link,
            Self::Text { .. } => PayloadKind::Text,
            Self::Email { .. } => PayloadKind::Email,
            Self::Phone { .. } => PayloadKind::Phone,
            Self::WhatsApp { .. } => PayloadKind::WhatsApp,
            Self::WiFi(_) => PayloadKind::WiFi,
            Self::VCard(_) => PayloadKind::VCard,
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::Text { content: String::new() }
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.formatted_string())
    }
}

// Payload kind
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum PayloadKind {
    Link,
    Text,
    Email,
    Phone,
    WhatsApp,
    WiFi,
    VCard,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 7] =
        [Self::Link, Self::Text, Self::Email, Self::Phone, Self::WhatsApp, Self::WiFi, Self::VCard];

    /// Discriminant stored in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Text => "text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::WhatsApp => "whatsapp",
            Self::WiFi => "wifi",
            Self::VCard => "vcard",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == tag)
    }

    /// Word used as the prefix of generated names
    pub fn label(&self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Text => "Text",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::WhatsApp => "WhatsApp",
            Self::WiFi => "WiFi",
            Self::VCard => "Contact",
        }
    }
}

impl Display for PayloadKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.as_str())
    }
}

// WiFi
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WifiNetwork {
    pub ssid: String,
    pub password: String,
    pub is_hidden: bool,
    pub security: SecurityKind,
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum SecurityKind {
    #[default]
    Wpa,
    Wep,
    NoPass,
}

impl SecurityKind {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
        }
    }

    /// Lenient parse used for scanned strings. Anything unknown falls back to WPA.
    pub fn from_scanned(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::Wpa)
    }

    /// Strict parse used for persisted records
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "WPA" | "WPA2" => Some(Self::Wpa),
            "WEP" => Some(Self::Wep),
            "NOPASS" => Some(Self::NoPass),
            _ => None,
        }
    }
}

// vCard
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub note: String,
}

impl Contact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), ..Default::default() }
    }
}
