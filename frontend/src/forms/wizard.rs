use std::fmt;
use std::num::NonZeroU8;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::forms::transport::{Payload, SubmissionTransport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("form field `{field}` expects a {expected} value")]
    WrongKind { field: String, expected: &'static str },
    #[error("a wizard needs at least one field")]
    NoFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(flag) => !flag,
        }
    }

    pub fn into_text(self, field: &str) -> Result<String, WizardError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Flag(_) => Err(WizardError::WrongKind {
                field: field.to_string(),
                expected: "text",
            }),
        }
    }

    pub fn into_flag(self, field: &str) -> Result<bool, WizardError> {
        match self {
            FieldValue::Flag(flag) => Ok(flag),
            FieldValue::Text(_) => Err(WizardError::WrongKind {
                field: field.to_string(),
                expected: "checkbox",
            }),
        }
    }

    fn same_kind(&self, other: &FieldValue) -> bool {
        matches!(
            (self, other),
            (FieldValue::Text(_), FieldValue::Text(_)) | (FieldValue::Flag(_), FieldValue::Flag(_))
        )
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Flag(true) => f.write_str("Yes"),
            FieldValue::Flag(false) => f.write_str("No"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

/// The record a wizard collects. Keys are fixed by the implementation.
pub trait FormFields: Clone + PartialEq + 'static {
    fn set(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError>;
    fn get(&self, name: &str) -> Option<FieldValue>;
    fn field_names(&self) -> Vec<&str>;
    fn payload(&self) -> Payload;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Number,
    TextArea,
    Select(&'static [&'static str]),
    Checkbox,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub blurb: &'static str,
    pub fields: &'static [FieldSpec],
}

/// A wizard schema with one Rust field per input and a static step layout.
pub trait FormDefinition: FormFields + Default {
    const TITLE: &'static str;
    const STEPS: &'static [StepSpec];
}

/// Builds the payload of a [`FormDefinition`] in step order, each entry
/// labelled and grouped under its step title.
pub fn payload_from_steps<F: FormFields>(fields: &F, steps: &[StepSpec]) -> Payload {
    let mut payload = Payload::new();
    for step in steps {
        for spec in step.fields {
            let value = fields.get(spec.name).unwrap_or_default();
            payload.push(spec.name, spec.label, Some(step.title), value);
        }
    }
    payload
}

/// Generic string-keyed record for forms without a dedicated schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    /// Later duplicates of a key are ignored.
    pub fn new<K, I>(defaults: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        let mut entries: Vec<(String, FieldValue)> = Vec::new();
        for (key, value) in defaults {
            let key = key.into();
            if !entries.iter().any(|(existing, _)| *existing == key) {
                entries.push((key, value));
            }
        }
        Self { entries }
    }
}

impl FormFields for FieldMap {
    fn set(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, slot)| slot)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        if !slot.same_kind(&value) {
            return Err(WizardError::WrongKind {
                field: name.to_string(),
                expected: if matches!(slot, FieldValue::Flag(_)) { "checkbox" } else { "text" },
            });
        }
        *slot = value;
        Ok(())
    }

    fn get(&self, name: &str) -> Option<FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    fn payload(&self) -> Payload {
        let mut payload = Payload::new();
        for (key, value) in &self.entries {
            payload.push(key.as_str(), key.as_str(), None, value.clone());
        }
        payload
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing(u8),
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    /// The transport was invoked and reported an error. The wizard still
    /// counts as submitted.
    TransportFailed(TransportError),
    NotOnFinalStep,
    AlreadySubmitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState<F> {
    current_step: u8,
    total_steps: u8,
    fields: F,
    submitted: bool,
}

impl<F: FormFields> WizardState<F> {
    pub fn new(fields: F, total_steps: NonZeroU8) -> Result<Self, WizardError> {
        if fields.field_names().is_empty() {
            return Err(WizardError::NoFields);
        }
        Ok(Self {
            current_step: 1,
            total_steps: total_steps.get(),
            fields,
            submitted: false,
        })
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn total_steps(&self) -> u8 {
        self.total_steps
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps
    }

    pub fn phase(&self) -> WizardPhase {
        if self.submitted {
            WizardPhase::Submitted
        } else {
            WizardPhase::Editing(self.current_step)
        }
    }

    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.current_step) * 100 / u16::from(self.total_steps)) as u8
    }

    /// Replaces one field. On error nothing changes.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
        self.fields.set(name, value)
    }

    pub fn advance(&mut self) {
        if self.submitted {
            debug!("Ignoring advance on a submitted wizard");
            return;
        }
        self.current_step = self.current_step.saturating_add(1).min(self.total_steps);
    }

    pub fn retreat(&mut self) {
        if self.submitted {
            debug!("Ignoring retreat on a submitted wizard");
            return;
        }
        self.current_step = self.current_step.saturating_sub(1).max(1);
    }

    /// Hands every field to `transport` exactly once for the lifetime of
    /// this state.
    pub fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: SubmissionTransport + ?Sized,
    {
        if self.submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        if !self.is_final_step() {
            debug!(
                "Ignoring submit on step {} of {}",
                self.current_step, self.total_steps
            );
            return SubmitOutcome::NotOnFinalStep;
        }

        let payload = self.fields.payload();
        debug!(
            "Submitting {}",
            serde_json::to_string(&payload).unwrap_or_else(|e| e.to_string())
        );
        let result = transport.send(&payload);
        self.submitted = true;
        match result {
            Ok(()) => SubmitOutcome::Sent,
            Err(e) => {
                warn!("Form transport failed: {}", e);
                SubmitOutcome::TransportFailed(e)
            }
        }
    }
}

impl<F: FormDefinition> WizardState<F> {
    /// One step per entry of `F::STEPS`.
    pub fn from_definition(fields: F) -> Result<Self, WizardError> {
        let total_steps = u8::try_from(F::STEPS.len()).unwrap_or(u8::MAX);
        let total_steps = NonZeroU8::new(total_steps).ok_or(WizardError::NoFields)?;
        Self::new(fields, total_steps)
    }

    /// Back to step 1 with empty fields. A submitted wizard stays submitted.
    pub fn restart(&mut self) {
        if self.submitted {
            debug!("Ignoring restart on a submitted wizard");
            return;
        }
        self.current_step = 1;
        self.fields = F::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::transport::MockSubmissionTransport;

    fn name_fields() -> FieldMap {
        FieldMap::new([("firstName", FieldValue::from("")), ("lastName", FieldValue::from(""))])
    }

    fn steps(n: u8) -> NonZeroU8 {
        NonZeroU8::new(n).unwrap()
    }

    #[test]
    fn new_wizard_starts_on_first_step() {
        let wizard = WizardState::new(name_fields(), steps(4)).unwrap();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.total_steps(), 4);
        assert!(!wizard.is_submitted());
        assert_eq!(wizard.phase(), WizardPhase::Editing(1));
        assert_eq!(wizard.fields(), &name_fields());
    }

    #[test]
    fn new_wizard_requires_fields() {
        let empty = FieldMap::new(Vec::<(String, FieldValue)>::new());
        assert_eq!(WizardState::new(empty, steps(2)), Err(WizardError::NoFields));
    }

    #[test]
    fn steps_stay_within_bounds() {
        let mut wizard = WizardState::new(name_fields(), steps(3)).unwrap();
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);

        for expected in [2, 3, 3, 3] {
            wizard.advance();
            assert_eq!(wizard.current_step(), expected);
        }
        for expected in [2, 1, 1] {
            wizard.retreat();
            assert_eq!(wizard.current_step(), expected);
        }
    }

    #[test]
    fn single_step_wizard_is_always_final() {
        let mut wizard = WizardState::new(name_fields(), steps(1)).unwrap();
        assert!(wizard.is_final_step());
        wizard.advance();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn set_field_changes_only_that_field() {
        let mut wizard = WizardState::new(name_fields(), steps(4)).unwrap();
        wizard.advance();
        wizard.set_field("firstName", "Jane".into()).unwrap();

        assert_eq!(wizard.fields().get("firstName"), Some("Jane".into()));
        assert_eq!(wizard.fields().get("lastName"), Some("".into()));
        assert_eq!(wizard.current_step(), 2);
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn unknown_field_is_rejected_without_change() {
        let mut wizard = WizardState::new(name_fields(), steps(2)).unwrap();
        let before = wizard.clone();
        assert_eq!(
            wizard.set_field("middleName", "Q".into()),
            Err(WizardError::UnknownField("middleName".to_string()))
        );
        assert_eq!(wizard, before);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let fields = FieldMap::new([
            ("email", FieldValue::from("")),
            ("consentToContact", FieldValue::from(false)),
        ]);
        let mut wizard = WizardState::new(fields, steps(1)).unwrap();
        assert!(matches!(
            wizard.set_field("consentToContact", "yes".into()),
            Err(WizardError::WrongKind { expected: "checkbox", .. })
        ));
        assert!(matches!(
            wizard.set_field("email", true.into()),
            Err(WizardError::WrongKind { expected: "text", .. })
        ));
        wizard.set_field("consentToContact", true.into()).unwrap();
        assert_eq!(wizard.fields().get("consentToContact"), Some(FieldValue::Flag(true)));
    }

    #[test]
    fn submit_before_final_step_does_not_send() {
        let mut transport = MockSubmissionTransport::new();
        transport.expect_send().times(0);

        let mut wizard = WizardState::new(name_fields(), steps(2)).unwrap();
        assert_eq!(wizard.submit(&transport), SubmitOutcome::NotOnFinalStep);
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn submit_sends_once_and_is_terminal() {
        let mut transport = MockSubmissionTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));

        let mut wizard = WizardState::new(name_fields(), steps(2)).unwrap();
        wizard.advance();
        assert_eq!(wizard.submit(&transport), SubmitOutcome::Sent);
        assert_eq!(wizard.submit(&transport), SubmitOutcome::AlreadySubmitted);

        wizard.retreat();
        wizard.advance();
        wizard.set_field("lastName", "Doe".into()).unwrap();
        assert!(wizard.is_submitted());
        assert_eq!(wizard.phase(), WizardPhase::Submitted);
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn failed_transport_still_marks_submitted() {
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(TransportError::NoWindow));

        let mut wizard = WizardState::new(name_fields(), steps(1)).unwrap();
        assert_eq!(
            wizard.submit(&transport),
            SubmitOutcome::TransportFailed(TransportError::NoWindow)
        );
        assert!(wizard.is_submitted());
        assert_eq!(wizard.submit(&transport), SubmitOutcome::AlreadySubmitted);
    }

    #[test]
    fn four_step_wizard_end_to_end() {
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .withf(|payload| {
                serde_json::to_value(payload).ok()
                    == Some(serde_json::json!({"firstName": "Jane", "lastName": ""}))
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut wizard = WizardState::new(name_fields(), steps(4)).unwrap();
        wizard.set_field("firstName", "Jane".into()).unwrap();
        wizard.advance();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.current_step(), 4);
        assert_eq!(wizard.progress_percent(), 100);

        assert_eq!(wizard.submit(&transport), SubmitOutcome::Sent);
        assert!(wizard.is_submitted());
        assert_eq!(wizard.submit(&transport), SubmitOutcome::AlreadySubmitted);
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Contact {
        name: String,
    }

    impl FormFields for Contact {
        fn set(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
            match name {
                "name" => self.name = value.into_text(name)?,
                _ => return Err(WizardError::UnknownField(name.to_string())),
            }
            Ok(())
        }

        fn get(&self, name: &str) -> Option<FieldValue> {
            (name == "name").then(|| FieldValue::from(self.name.clone()))
        }

        fn field_names(&self) -> Vec<&str> {
            vec!["name"]
        }

        fn payload(&self) -> Payload {
            payload_from_steps(self, Self::STEPS)
        }
    }

    impl FormDefinition for Contact {
        const TITLE: &'static str = "Contact";
        const STEPS: &'static [StepSpec] = &[
            StepSpec {
                title: "Name",
                blurb: "",
                fields: &[FieldSpec { name: "name", label: "Name", kind: FieldKind::Text, required: true }],
            },
            StepSpec { title: "Done", blurb: "", fields: &[] },
        ];
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Blank;

    impl FormFields for Blank {
        fn set(&mut self, name: &str, _: FieldValue) -> Result<(), WizardError> {
            Err(WizardError::UnknownField(name.to_string()))
        }

        fn get(&self, _: &str) -> Option<FieldValue> {
            None
        }

        fn field_names(&self) -> Vec<&str> {
            Vec::new()
        }

        fn payload(&self) -> Payload {
            Payload::new()
        }
    }

    impl FormDefinition for Blank {
        const TITLE: &'static str = "Blank";
        const STEPS: &'static [StepSpec] = &[StepSpec { title: "Nothing", blurb: "", fields: &[] }];
    }

    #[test]
    fn definition_sets_step_count() {
        let wizard = WizardState::from_definition(Contact::default()).unwrap();
        assert_eq!(wizard.total_steps(), 2);
        assert_eq!(wizard.phase(), WizardPhase::Editing(1));
    }

    #[test]
    fn definition_without_fields_is_rejected() {
        assert_eq!(WizardState::from_definition(Blank), Err(WizardError::NoFields));
    }

    #[test]
    fn restart_clears_fields_and_step() {
        let mut wizard = WizardState::from_definition(Contact::default()).unwrap();
        wizard.set_field("name", "Jane".into()).unwrap();
        wizard.advance();
        wizard.restart();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.fields(), &Contact::default());
    }

    #[test]
    fn restart_does_not_reopen_a_submitted_wizard() {
        let mut transport = MockSubmissionTransport::new();
        transport.expect_send().times(1).returning(|_| Ok(()));

        let mut wizard = WizardState::from_definition(Contact::default()).unwrap();
        wizard.set_field("name", "Jane".into()).unwrap();
        wizard.advance();
        assert_eq!(wizard.submit(&transport), SubmitOutcome::Sent);

        wizard.restart();
        assert!(wizard.is_submitted());
        assert_eq!(wizard.fields().name, "Jane");
    }

    #[test]
    fn field_map_ignores_duplicate_defaults() {
        let fields = FieldMap::new([
            ("phone", FieldValue::from("")),
            ("phone", FieldValue::from("555")),
        ]);
        assert_eq!(fields.field_names(), vec!["phone"]);
        assert_eq!(fields.get("phone"), Some("".into()));
    }

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::from("Jane").to_string(), "Jane");
        assert_eq!(FieldValue::from(true).to_string(), "Yes");
        assert_eq!(FieldValue::from(false).to_string(), "No");
        assert!(FieldValue::from("  ").is_blank());
        assert!(!FieldValue::from(true).is_blank());
    }
}
