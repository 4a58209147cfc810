use super::{Contact, Payload, SecurityKind, WifiNetwork};
use crate::common::encode_component;

// Formatter
//------------------------------------------------------------------------------

impl Payload {
    /// Canonical string handed to the QR encoder.
    ///
    /// WiFi and vCard fields are written verbatim: `;`, `:` and `,` are not
    /// escaped, so values containing them do not survive [`classify`](super::classify).
    pub fn formatted_string(&self) -> String {
        match self {
            Self::Link { url } => url.clone(),
            Self::Text { content } => content.clone(),
            Self::Phone { number } => format!("tel:{number}"),
            Self::Email { address, subject, body } => format_email(address, subject, body),
            Self::WhatsApp { number, message } => format_whatsapp(number, message),
            Self::WiFi(net) => format_wifi(net),
            Self::VCard(contact) => format_vcard(contact),
        }
    }
}

fn format_email(address: &str, subject: &str, body: &str) -> String {
    let mut res = format!("mailto:{address}");
    if subject.is_empty() && body.is_empty() {
        return res;
    }

    res.push('?');
    if !subject.is_empty() {
        res.push_str("subject=");
        res.push_str(&encode_component(subject));
    }
    if !body.is_empty() {
        if !subject.is_empty() {
            res.push('&');
        }
        res.push_str("body=");
        res.push_str(&encode_component(body));
    }
    res
}

fn format_whatsapp(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| !matches!(c, '+' | ' ')).collect();
    format!("https://wa.me/{digits}?text={}", encode_component(message))
}

fn format_wifi(net: &WifiNetwork) -> String {
    let mut res = format!("WIFI:S:{};", net.ssid);
    if net.security != SecurityKind::NoPass {
        res.push_str(&format!("P:{};", net.password));
    }
    res.push_str(&format!("T:{};", net.security.token()));
    if net.is_hidden {
        res.push_str("H:true;");
    }
    res.push(';');
    res
}

fn format_vcard(c: &Contact) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", c.last_name, c.first_name),
        format!("FN:{} {}", c.first_name, c.last_name),
    ];

    let optional = [
        ("ORG:", &c.organization, ""),
        ("TITLE:", &c.title, ""),
        ("TEL;TYPE=CELL:", &c.phone, ""),
        ("EMAIL:", &c.email, ""),
        ("ADR:;;", &c.address, ";;;;"),
        ("URL:", &c.website, ""),
        ("NOTE:", &c.note, ""),
    ];
    for (head, value, tail) in optional {
        if !value.is_empty() {
            lines.push(format!("{head}{value}{tail}"));
        }
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod format_tests {
    use test_case::test_case;

    use super::super::{Contact, Payload, SecurityKind};

    #[test_case(Payload::link("https://example.com/a?b=c"), "https://example.com/a?b=c")]
    #[test_case(Payload::text("hello world"), "hello world")]
    #[test_case(Payload::text(""), "")]
    #[test_case(Payload::phone("+15551234"), "tel:+15551234")]
    fn test_passthrough(payload: Payload, exp: &str) {
        assert_eq!(payload.formatted_string(), exp);
    }

    #[test_case("a@b.com", "", "", "mailto:a@b.com")]
    #[test_case("a@b.com", "Hi", "Go", "mailto:a@b.com?subject=Hi&body=Go")]
    #[test_case("a@b.com", "Hi there", "", "mailto:a@b.com?subject=Hi%20there")]
    #[test_case("a@b.com", "", "Go & see", "mailto:a@b.com?body=Go%20%26%20see")]
    #[test_case("", "", "", "mailto:")]
    fn test_email(address: &str, subject: &str, body: &str, exp: &str) {
        assert_eq!(Payload::email(address, subject, body).formatted_string(), exp);
    }

    #[test_case("+1 555 1234", "hey you", "https://wa.me/15551234?text=hey%20you")]
    #[test_case("15551234", "", "https://wa.me/15551234?text=")]
    #[test_case("+44-20", "a=b", "https://wa.me/44-20?text=a%3Db")]
    fn test_whatsapp(number: &str, message: &str, exp: &str) {
        assert_eq!(Payload::whatsapp(number, message).formatted_string(), exp);
    }

    #[test_case("Home", "pass123", false, SecurityKind::Wpa, "WIFI:S:Home;P:pass123;T:WPA;;")]
    #[test_case("Home", "pass123", true, SecurityKind::Wep, "WIFI:S:Home;P:pass123;T:WEP;H:true;;")]
    #[test_case("Cafe", "ignored", false, SecurityKind::NoPass, "WIFI:S:Cafe;T:nopass;;")]
    #[test_case("Cafe", "", true, SecurityKind::NoPass, "WIFI:S:Cafe;T:nopass;H:true;;")]
    #[test_case("a;b", "p:q", false, SecurityKind::Wpa, "WIFI:S:a;b;P:p:q;T:WPA;;")]
    fn test_wifi(ssid: &str, password: &str, hidden: bool, sec: SecurityKind, exp: &str) {
        assert_eq!(Payload::wifi(ssid, password, hidden, sec).formatted_string(), exp);
    }

    #[test]
    fn test_vcard_minimal() {
        let payload = Payload::VCard(Contact::new("Jane", "Doe"));
        let exp = "BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane;;;\nFN:Jane Doe\nEND:VCARD";
        assert_eq!(payload.formatted_string(), exp);
    }

    #[test]
    fn test_vcard_full() {
        let contact = Contact {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            organization: "Acme".to_string(),
            title: "Engineer".to_string(),
            phone: "+15551234".to_string(),
            email: "jane@acme.io".to_string(),
            address: "1 Main St".to_string(),
            website: "https://acme.io".to_string(),
            note: "Met at conf".to_string(),
        };
        let exp = [
            "BEGIN:VCARD",
            "VERSION:3.0",
            "N:Doe;Jane;;;",
            "FN:Jane Doe",
            "ORG:Acme",
            "TITLE:Engineer",
            "TEL;TYPE=CELL:+15551234",
            "EMAIL:jane@acme.io",
            "ADR:;;1 Main St;;;;",
            "URL:https://acme.io",
            "NOTE:Met at conf",
            "END:VCARD",
        ]
        .join("\n");
        assert_eq!(Payload::VCard(contact).formatted_string(), exp);
    }

    #[test]
    fn test_display_matches_formatted_string() {
        let payload = Payload::email("a@b.com", "Hi", "");
        assert_eq!(payload.to_string(), payload.formatted_string());
    }
}
