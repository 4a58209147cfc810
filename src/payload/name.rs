use time::{macros::format_description, OffsetDateTime};

use super::Payload;

const TEXT_LABEL_LEN: usize = 16;

// Default names
//------------------------------------------------------------------------------

impl Payload {
    /// Human readable label for a freshly scanned or created payload, e.g.
    /// `Link_example.com` or `WiFi_Home`. Falls back to `<Kind>_<timestamp>` when
    /// the identifying field is empty, so the result is never empty.
    pub fn default_name(&self, now: OffsetDateTime) -> String {
        let subject = match self {
            Self::Link { url } => link_host(url).to_string(),
            Self::Text { content } => {
                let word = content.split_whitespace().next().unwrap_or_default();
                word.chars().take(TEXT_LABEL_LEN).collect()
            }
            Self::Email { address, .. } => {
                address.split('@').next().unwrap_or_default().to_string()
            }
            Self::Phone { number } | Self::WhatsApp { number, .. } => number.clone(),
            Self::WiFi(net) => net.ssid.clone(),
            Self::VCard(c) => [c.first_name.as_str(), c.last_name.as_str()]
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("_"),
        };

        let label = self.kind().label();
        let subject = subject.trim();
        if subject.is_empty() {
            return format!("{label}_{}", timestamp(now));
        }
        let subject = subject.split_whitespace().collect::<Vec<_>>().join("_");
        format!("{label}_{subject}")
    }
}

// Host of an absolute URL: scheme, userinfo, port, path, query and fragment removed
fn link_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    host.split(':').next().unwrap_or_default()
}

fn timestamp(now: OffsetDateTime) -> String {
    let fmt = format_description!("[year][month][day]_[hour][minute][second]");
    now.format(&fmt).unwrap_or_else(|_| now.unix_timestamp().to_string())
}
