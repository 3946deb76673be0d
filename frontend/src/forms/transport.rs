use log::{debug, info};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

use crate::forms::wizard::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("browser refused to open {target}: {reason}")]
    Rejected { target: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayloadEntry {
    pub name: String,
    pub label: String,
    pub section: Option<String>,
    pub value: FieldValue,
}

/// Every field of a wizard at the moment of submission, in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    entries: Vec<PayloadEntry>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        section: Option<&str>,
        value: FieldValue,
    ) {
        self.entries.push(PayloadEntry {
            name: name.into(),
            label: label.into(),
            section: section.map(str::to_string),
            value,
        });
    }

    pub fn entries(&self) -> &[PayloadEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }

    /// Text of a field, empty for flags and missing names.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn contact_name(&self) -> String {
        let first = self.text("firstName").trim();
        let last = self.text("lastName").trim();
        format!("{} {}", first, last).trim().to_string()
    }

    /// Renders the payload as the plain-text body of an intake email.
    pub fn to_text_block(&self, title: &str) -> String {
        let mut body = format!("{}\n", title);
        let mut current_section: Option<&str> = None;
        for entry in &self.entries {
            let section = entry.section.as_deref();
            if section != current_section {
                if let Some(heading) = section {
                    body.push_str(&format!("\n{}:\n", heading));
                }
                current_section = section;
            }
            body.push_str(&format!("{}: {}\n", entry.label, entry.value));
        }
        body
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|entry| (&entry.name, &entry.value)))
    }
}

/// Delivers a finished payload. Fire-and-forget: nothing is awaited.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionTransport {
    fn send(&self, payload: &Payload) -> Result<(), TransportError>;
}

/// Opens the visitor's mail client with the payload as the message body.
#[derive(Debug, Clone, PartialEq)]
pub struct MailtoTransport {
    pub recipient: String,
    pub subject: String,
}

impl MailtoTransport {
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
        }
    }

    pub fn subject_for(&self, payload: &Payload) -> String {
        let name = payload.contact_name();
        if name.is_empty() {
            self.subject.clone()
        } else {
            format!("{} - {}", self.subject, name)
        }
    }

    pub fn href(&self, payload: &Payload) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject_for(payload)),
            urlencoding::encode(&payload.to_text_block(&self.subject)),
        )
    }
}

impl SubmissionTransport for MailtoTransport {
    fn send(&self, payload: &Payload) -> Result<(), TransportError> {
        let href = self.href(payload);
        let window = web_sys::window().ok_or(TransportError::NoWindow)?;
        info!("Opening mail client for {}", self.subject);
        window
            .open_with_url(&href)
            .map(|_| ())
            .map_err(|e| TransportError::Rejected {
                target: "mailto link".to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Navigates to another page carrying the filled-in text fields as query
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTransport {
    pub path: String,
}

impl RedirectTransport {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn href(&self, payload: &Payload) -> String {
        let query: Vec<String> = payload
            .entries()
            .iter()
            .filter(|entry| !entry.value.is_blank())
            .filter_map(|entry| match &entry.value {
                FieldValue::Text(text) => Some(format!(
                    "{}={}",
                    urlencoding::encode(&entry.name),
                    urlencoding::encode(text.trim())
                )),
                FieldValue::Flag(_) => None,
            })
            .collect();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query.join("&"))
        }
    }
}

impl SubmissionTransport for RedirectTransport {
    fn send(&self, payload: &Payload) -> Result<(), TransportError> {
        let href = self.href(payload);
        let window = web_sys::window().ok_or(TransportError::NoWindow)?;
        debug!("Redirecting form submission to {}", self.path);
        window
            .location()
            .set_href(&href)
            .map_err(|e| TransportError::Rejected {
                target: href,
                reason: format!("{:?}", e),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transport {
    Mailto(MailtoTransport),
    Redirect(RedirectTransport),
}

impl SubmissionTransport for Transport {
    fn send(&self, payload: &Payload) -> Result<(), TransportError> {
        match self {
            Transport::Mailto(mailto) => mailto.send(payload),
            Transport::Redirect(redirect) => redirect.send(payload),
        }
    }
}
