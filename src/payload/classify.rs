use std::borrow::Cow;

use encoding_rs::SHIFT_JIS;
use tracing::{debug, trace};

use super::{Contact, Payload, SecurityKind, WifiNetwork};
use crate::common::{decode_component, starts_with_ci, strip_prefix_ci};

// Classifier
//------------------------------------------------------------------------------

/// Recovers a typed payload from a scanned string. Never fails: anything that is
/// not recognized becomes [`Payload::Text`].
///
/// Prefixes are matched ignoring ASCII case and checked in this order:
/// `https://wa.me/`, `http://` / `https://`, `mailto:`, `tel:`, `WIFI:`,
/// `BEGIN:VCARD`.
pub fn classify(input: &str) -> Payload {
    let payload = if let Some(rest) = strip_prefix_ci(input, "https://wa.me/") {
        parse_whatsapp(rest)
    } else if starts_with_ci(input, "http://") || starts_with_ci(input, "https://") {
        Payload::Link { url: input.to_string() }
    } else if let Some(rest) = strip_prefix_ci(input, "mailto:") {
        parse_email(rest)
    } else if let Some(rest) = strip_prefix_ci(input, "tel:") {
        Payload::Phone { number: rest.to_string() }
    } else if let Some(rest) = strip_prefix_ci(input, "WIFI:") {
        Payload::WiFi(parse_wifi(rest))
    } else if starts_with_ci(input, "BEGIN:VCARD") {
        Payload::VCard(parse_vcard(input))
    } else {
        Payload::Text { content: input.to_string() }
    };

    trace!(target: "qrpayload::classify", "Classified {} bytes as {}", input.len(), payload.kind());
    payload
}

/// Classifies a raw byte segment as returned by a scanner. Bytes that are not
/// UTF-8 are decoded as Shift_JIS, the QR byte-mode fallback, and as lossy
/// UTF-8 when that fails too.
pub fn classify_bytes(data: &[u8]) -> Payload {
    match std::str::from_utf8(data) {
        Ok(text) => classify(text),
        Err(_) => {
            let (decoded, _, has_err) = SHIFT_JIS.decode(data);
            let text = if has_err {
                debug!(target: "qrpayload::classify", "Undecodable scan of {} bytes, using lossy utf8", data.len());
                String::from_utf8_lossy(data)
            } else {
                debug!(target: "qrpayload::classify", "Scan of {} bytes decoded as Shift_JIS", data.len());
                decoded
            };
            classify(&text)
        }
    }
}

fn parse_whatsapp(rest: &str) -> Payload {
    let (number, message) = match rest.split_once("?text=") {
        Some((number, message)) => (number, decode_component(message)),
        None => (rest, Cow::Borrowed("")),
    };
    Payload::WhatsApp { number: number.to_string(), message: message.into_owned() }
}

fn parse_email(rest: &str) -> Payload {
    let (address, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut subject = String::new();
    let mut body = String::new();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key.eq_ignore_ascii_case("subject") {
            subject = decode_component(value).into_owned();
        } else if key.eq_ignore_ascii_case("body") {
            body = decode_component(value).into_owned();
        }
    }

    Payload::Email { address: address.to_string(), subject, body }
}

fn parse_wifi(rest: &str) -> WifiNetwork {
    let mut net = WifiNetwork::default();
    for seg in rest.split(';').filter(|s| !s.is_empty()) {
        if let Some(ssid) = strip_prefix_ci(seg, "S:") {
            net.ssid = ssid.to_string();
        } else if let Some(password) = strip_prefix_ci(seg, "P:") {
            net.password = password.to_string();
        } else if let Some(token) = strip_prefix_ci(seg, "T:") {
            net.security = SecurityKind::from_scanned(token);
        } else if let Some(hidden) = strip_prefix_ci(seg, "H:") {
            net.is_hidden = hidden.eq_ignore_ascii_case("true");
        }
    }
    net
}

fn parse_vcard(input: &str) -> Contact {
    let mut contact = Contact::default();
    for line in input.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(name) = strip_prefix_ci(line, "N:") {
            let mut parts = name.split(';');
            contact.last_name = parts.next().unwrap_or_default().to_string();
            contact.first_name = parts.next().unwrap_or_default().to_string();
        } else if let Some(org) = strip_prefix_ci(line, "ORG:") {
            contact.organization = org.to_string();
        } else if let Some(title) = strip_prefix_ci(line, "TITLE:") {
            contact.title = title.to_string();
        } else if starts_with_ci(line, "TEL:") || starts_with_ci(line, "TEL;") {
            contact.phone = after_last_colon(line).to_string();
        } else if starts_with_ci(line, "EMAIL:") || starts_with_ci(line, "EMAIL;") {
            contact.email = after_last_colon(line).to_string();
        } else if starts_with_ci(line, "ADR:") || starts_with_ci(line, "ADR;") {
            contact.address = join_address(after_last_colon(line));
        } else if let Some(url) = strip_prefix_ci(line, "URL:") {
            contact.website = url.to_string();
        } else if let Some(note) = strip_prefix_ci(line, "NOTE:") {
            contact.note = note.to_string();
        }
    }
    contact
}

fn after_last_colon(line: &str) -> &str {
    line.rsplit_once(':').map_or(line, |(_, value)| value)
}

// ADR values are `;`-separated components (po box, ext, street, city, ...)
fn join_address(value: &str) -> String {
    value.split(';').filter(|part| !part.is_empty()).collect::<Vec<_>>().join(", ")
}
