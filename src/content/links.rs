use super::ContactInfo;

const MAPS_QUERY_URL: &str = "https://maps.google.com/?q=";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    LinkedIn,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
            Self::LinkedIn => "LinkedIn",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Email => "✉",
            Self::Phone => "☎",
            Self::Location => "📍",
            Self::LinkedIn => "in",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Self::Email => "from-blue-500 to-cyan-500",
            Self::Phone => "from-green-500 to-emerald-500",
            Self::Location => "from-red-500 to-pink-500",
            Self::LinkedIn => "from-blue-600 to-indigo-600",
        }
    }
}

/// One card of the contact grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
    pub href: String,
}

impl ContactItem {
    /// Only profile links leave the page.
    pub fn opens_new_tab(&self) -> bool {
        self.kind == ContactKind::LinkedIn
    }

    pub fn target(&self) -> &'static str {
        if self.opens_new_tab() { "_blank" } else { "_self" }
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("noopener noreferrer")
    }
}

impl ContactInfo {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn map_href(&self) -> String {
        format!("{}{}", MAPS_QUERY_URL, encode_uri_component(&self.location))
    }

    pub fn items(&self) -> Vec<ContactItem> {
        vec![
            ContactItem {
                kind: ContactKind::Email,
                value: self.email.clone(),
                href: self.mailto_href(),
            },
            ContactItem {
                kind: ContactKind::Phone,
                value: self.phone.clone(),
                href: self.tel_href(),
            },
            ContactItem {
                kind: ContactKind::Location,
                value: self.location.clone(),
                href: self.map_href(),
            },
            ContactItem {
                kind: ContactKind::LinkedIn,
                value: self.linkedin_label.clone(),
                href: self.linkedin.clone(),
            }
        ]
    }
}

/// Percent-encodes `input` the way JavaScript's `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
