//! # qrpayload
//!
//! Typed content for QR codes. Builds the exact strings scanner apps understand
//! and turns scanned strings back into typed payloads.
//!
//! ## Features
//!
//! - **Formatting**: URL, text, `mailto:`, `tel:`, WhatsApp links, `WIFI:` network
//!   strings and vCard 3.0 blocks
//! - **Classification**: any scanned string (or raw byte segment) is recognized as
//!   one of the payload kinds, falling back to plain text
//! - **Storage records**: a tagged JSON record for payloads, styles and saved codes
//!
//! ## Quick Start
//!
//! ### Formatting a payload
//!
//! ```rust
//! use qrpayload::{Payload, SecurityKind};
//!
//! let wifi = Payload::wifi("Home", "pass123", false, SecurityKind::Wpa);
//! assert_eq!(wifi.formatted_string(), "WIFI:S:Home;P:pass123;T:WPA;;");
//!
//! let chat = Payload::whatsapp("+1 555 1234", "hey you");
//! assert_eq!(chat.to_string(), "https://wa.me/15551234?text=hey%20you");
//! ```
//!
//! ### Classifying a scan
//!
//! ```rust
//! use qrpayload::{classify, Payload};
//!
//! assert_eq!(classify("tel:+15551234"), Payload::phone("+15551234"));
//! assert_eq!(classify("just words"), Payload::text("just words"));
//! ```
//!
//! ### Saving a code
//!
//! ```rust
//! use qrpayload::{classify, store::{decode_code, encode_code, CodeBuilder}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = CodeBuilder::new(classify("https://example.com/menu")).build();
//! assert_eq!(code.name(), "Link_example.com");
//!
//! let bytes = encode_code(&code)?;
//! assert_eq!(decode_code(&bytes)?, code);
//! # Ok(())
//! # }
//! ```
//!
//! ## Known limitations
//!
//! `WIFI:` and vCard fields are written without escaping, so values containing
//! `;`, `:` or newlines do not classify back to the same fields.

pub(crate) mod common;
pub mod payload;
pub mod store;

pub use common::error::{PayloadError, PayloadResult};
pub use payload::{
    classify, classify_bytes, Contact, Payload, PayloadKind, PayloadRecord, SecurityKind,
    WifiNetwork,
};
pub use store::{CodeBuilder, StoredCode, Style};
