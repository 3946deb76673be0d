use crate::forms::calculator::{
    AccidentType, FaultShare, InjurySeverity, InjuryType, InsuranceCoverage, PermanentImpact,
};
use crate::forms::transport::Payload;
use crate::forms::wizard::{
    payload_from_steps, FieldKind, FieldSpec, FieldValue, FormDefinition, FormFields, StepSpec,
    WizardError,
};

/// Declares a wizard record: one `String` per `text` field, one `bool` per
/// `flag` field, keyed by the name the inputs and payload use.
macro_rules! form_fields {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $kind:ident => $key:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: form_fields!(@type $kind),)*
        }

        impl FormFields for $name {
            fn set(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
                match name {
                    $($key => self.$field = form_fields!(@take $kind, value, name),)*
                    _ => return Err(WizardError::UnknownField(name.to_string())),
                }
                Ok(())
            }

            fn get(&self, name: &str) -> Option<FieldValue> {
                match name {
                    $($key => Some(FieldValue::from(self.$field.clone())),)*
                    _ => None,
                }
            }

            fn field_names(&self) -> Vec<&str> {
                vec![$($key),*]
            }

            fn payload(&self) -> Payload {
                payload_from_steps(self, <Self as FormDefinition>::STEPS)
            }
        }
    };
    (@type text) => { String };
    (@type flag) => { bool };
    (@take text, $value:ident, $name:ident) => { $value.into_text($name)? };
    (@take flag, $value:ident, $name:ident) => { $value.into_flag($name)? };
}

const YES_NO: &[&str] = &["Yes", "No", "Not sure"];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "firstName", label: "First Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "lastName", label: "Last Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", label: "Email Address", kind: FieldKind::Email, required: true },
    FieldSpec { name: "phone", label: "Phone Number", kind: FieldKind::Tel, required: true },
];

form_fields! {
    /// Four-step case evaluation used on every practice area.
    pub struct CaseEvaluationFields {
        first_name: text => "firstName",
        last_name: text => "lastName",
        email: text => "email",
        phone: text => "phone",
        incident_date: text => "incidentDate",
        incident_location: text => "incidentLocation",
        incident_type: text => "incidentType",
        incident_description: text => "incidentDescription",
        injury_type: text => "injuryType",
        medical_treatment: text => "medicalTreatment",
        current_condition: text => "currentCondition",
        has_attorney: text => "hasAttorney",
        insurance_claim: text => "insuranceClaim",
        additional_info: text => "additionalInfo",
        consent_to_contact: flag => "consentToContact",
    }
}

impl FormDefinition for CaseEvaluationFields {
    const TITLE: &'static str = "Free Case Evaluation";
    const STEPS: &'static [StepSpec] = &[
        StepSpec {
            title: "Contact Information",
            blurb: "Let's start with how we can reach you.",
            fields: CONTACT_FIELDS,
        },
        StepSpec {
            title: "Incident Details",
            blurb: "Tell us what happened.",
            fields: &[
                FieldSpec { name: "incidentDate", label: "Date of Incident", kind: FieldKind::Date, required: false },
                FieldSpec { name: "incidentLocation", label: "Location", kind: FieldKind::Text, required: false },
                FieldSpec {
                    name: "incidentType",
                    label: "Type of Incident",
                    kind: FieldKind::Select(&[
                        "Vehicle collision",
                        "Fall from height",
                        "Premises hazard",
                        "Workplace incident",
                        "Defective product",
                        "Other",
                    ]),
                    required: false,
                },
                FieldSpec { name: "incidentDescription", label: "Description", kind: FieldKind::TextArea, required: false },
            ],
        },
        StepSpec {
            title: "Injuries & Treatment",
            blurb: "Your injuries and the care you have received so far.",
            fields: &[
                FieldSpec { name: "injuryType", label: "Injuries Received", kind: FieldKind::Text, required: false },
                FieldSpec {
                    name: "medicalTreatment",
                    label: "Medical Treatment",
                    kind: FieldKind::Select(&["Emergency room", "Hospitalized", "Ongoing treatment", "No treatment yet"]),
                    required: false,
                },
                FieldSpec { name: "currentCondition", label: "Current Condition", kind: FieldKind::TextArea, required: false },
            ],
        },
        StepSpec {
            title: "Legal Information",
            blurb: "A few last questions before we review your case.",
            fields: &[
                FieldSpec { name: "hasAttorney", label: "Already Represented by an Attorney", kind: FieldKind::Select(YES_NO), required: false },
                FieldSpec { name: "insuranceClaim", label: "Insurance Claim Filed", kind: FieldKind::Select(YES_NO), required: false },
                FieldSpec { name: "additionalInfo", label: "Additional Information", kind: FieldKind::TextArea, required: false },
                FieldSpec {
                    name: "consentToContact",
                    label: "I agree to be contacted about my case",
                    kind: FieldKind::Checkbox,
                    required: true,
                },
            ],
        },
    ];
}

form_fields! {
    pub struct ConsultationFields {
        first_name: text => "firstName",
        last_name: text => "lastName",
        email: text => "email",
        phone: text => "phone",
        practice_area: text => "practiceArea",
        preferred_contact: text => "preferredContact",
        case_summary: text => "caseSummary",
        consent_to_contact: flag => "consentToContact",
    }
}

impl FormDefinition for ConsultationFields {
    const TITLE: &'static str = "Free Consultation Request";
    const STEPS: &'static [StepSpec] = &[
        StepSpec {
            title: "Contact Information",
            blurb: "No fees unless we win. Every consultation is confidential.",
            fields: CONTACT_FIELDS,
        },
        StepSpec {
            title: "Your Case",
            blurb: "A short summary helps us prepare for the call.",
            fields: &[
                FieldSpec {
                    name: "practiceArea",
                    label: "Practice Area",
                    kind: FieldKind::Select(&[
                        "Car accident",
                        "Railroad accident",
                        "Scaffolding fall",
                        "Defamation",
                        "Other personal injury",
                    ]),
                    required: false,
                },
                FieldSpec {
                    name: "preferredContact",
                    label: "Preferred Contact Method",
                    kind: FieldKind::Select(&["Phone", "Email", "Text message"]),
                    required: false,
                },
                FieldSpec { name: "caseSummary", label: "Case Summary", kind: FieldKind::TextArea, required: false },
                FieldSpec {
                    name: "consentToContact",
                    label: "I agree to be contacted about my case",
                    kind: FieldKind::Checkbox,
                    required: true,
                },
            ],
        },
    ];
}

form_fields! {
    /// Sidebar form that forwards to the full case evaluation.
    pub struct QuickContactFields {
        first_name: text => "firstName",
        last_name: text => "lastName",
        phone: text => "phone",
        email: text => "email",
    }
}

impl FormDefinition for QuickContactFields {
    const TITLE: &'static str = "Start Your Free Evaluation";
    const STEPS: &'static [StepSpec] = &[StepSpec {
        title: "Contact Information",
        blurb: "We respond within 24 hours.",
        fields: &[
            FieldSpec { name: "firstName", label: "First Name", kind: FieldKind::Text, required: true },
            FieldSpec { name: "lastName", label: "Last Name", kind: FieldKind::Text, required: true },
            FieldSpec { name: "phone", label: "Phone Number", kind: FieldKind::Tel, required: true },
            FieldSpec { name: "email", label: "Email Address", kind: FieldKind::Email, required: false },
        ],
    }];
}

form_fields! {
    /// Answers of the car accident compensation calculator. The third step
    /// has no inputs and shows the estimate.
    pub struct CarAccidentFields {
        injury_type: text => "injuryType",
        injury_severity: text => "injurySeverity",
        accident_type: text => "accidentType",
        medical_costs: text => "medicalCosts",
        future_medical: text => "futureMedical",
        lost_wages: text => "lostWages",
        vehicle_damage: text => "vehicleDamage",
        fault_percentage: text => "faultPercentage",
        permanent_impact: text => "permanentImpact",
        insurance: text => "insurance",
    }
}

impl FormDefinition for CarAccidentFields {
    const TITLE: &'static str = "Car Accident Calculator";
    const STEPS: &'static [StepSpec] = &[
        StepSpec {
            title: "Injury & Accident Details",
            blurb: "Tell us about your injuries and the accident",
            fields: &[
                FieldSpec { name: "injuryType", label: "Type of Injury", kind: FieldKind::Select(InjuryType::VALUES), required: true },
                FieldSpec { name: "injurySeverity", label: "Injury Severity", kind: FieldKind::Select(InjurySeverity::VALUES), required: true },
                FieldSpec { name: "accidentType", label: "Accident Type", kind: FieldKind::Select(AccidentType::VALUES), required: true },
            ],
        },
        StepSpec {
            title: "Financial Impact & Case Details",
            blurb: "Damages and liability information",
            fields: &[
                FieldSpec { name: "medicalCosts", label: "Medical Expenses to Date ($)", kind: FieldKind::Number, required: true },
                FieldSpec { name: "futureMedical", label: "Estimated Future Medical Costs ($)", kind: FieldKind::Number, required: false },
                FieldSpec { name: "lostWages", label: "Lost Wages & Income ($)", kind: FieldKind::Number, required: true },
                FieldSpec { name: "vehicleDamage", label: "Vehicle Damage ($)", kind: FieldKind::Number, required: true },
                FieldSpec { name: "faultPercentage", label: "Fault Percentage", kind: FieldKind::Select(FaultShare::VALUES), required: true },
                FieldSpec { name: "permanentImpact", label: "Permanent Impact", kind: FieldKind::Select(PermanentImpact::VALUES), required: true },
                FieldSpec { name: "insurance", label: "At-Fault Driver's Insurance", kind: FieldKind::Select(InsuranceCoverage::VALUES), required: true },
            ],
        },
        StepSpec {
            title: "Your Estimated Settlement Range",
            blurb: "Based on your accident details",
            fields: &[],
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::wizard::WizardState;

    fn assert_steps_cover_fields<F: FormDefinition>() {
        let fields = F::default();
        let declared = fields.field_names();
        let mut listed: Vec<&str> = F::STEPS
            .iter()
            .flat_map(|step| step.fields.iter().map(|spec| spec.name))
            .collect();

        for name in &listed {
            assert!(declared.contains(name), "{} lists undeclared field {}", F::TITLE, name);
        }
        listed.sort_unstable();
        let before = listed.len();
        listed.dedup();
        assert_eq!(before, listed.len(), "{} lists a field twice", F::TITLE);
        assert_eq!(listed.len(), declared.len(), "{} leaves a field out of its steps", F::TITLE);
    }

    #[test]
    fn steps_cover_every_declared_field() {
        assert_steps_cover_fields::<CaseEvaluationFields>();
        assert_steps_cover_fields::<ConsultationFields>();
        assert_steps_cover_fields::<QuickContactFields>();
        assert_steps_cover_fields::<CarAccidentFields>();
    }

    #[test]
    fn step_counts_follow_definitions() {
        assert_eq!(WizardState::from_definition(CaseEvaluationFields::default()).unwrap().total_steps(), 4);
        assert_eq!(WizardState::from_definition(ConsultationFields::default()).unwrap().total_steps(), 2);
        assert_eq!(WizardState::from_definition(QuickContactFields::default()).unwrap().total_steps(), 1);
        assert_eq!(WizardState::from_definition(CarAccidentFields::default()).unwrap().total_steps(), 3);
    }

    #[test]
    fn schema_set_and_get_by_name() {
        let mut fields = CaseEvaluationFields::default();
        fields.set("incidentLocation", "Van Nuys".into()).unwrap();
        fields.set("consentToContact", true.into()).unwrap();

        assert_eq!(fields.incident_location, "Van Nuys");
        assert!(fields.consent_to_contact);
        assert_eq!(fields.get("consentToContact"), Some(FieldValue::Flag(true)));
        assert_eq!(fields.get("nickname"), None);
        assert_eq!(
            fields.set("nickname", "JJ".into()),
            Err(WizardError::UnknownField("nickname".to_string()))
        );
        assert!(matches!(
            fields.set("consentToContact", "yes".into()),
            Err(WizardError::WrongKind { .. })
        ));
    }

    #[test]
    fn payload_contains_every_field_in_step_order() {
        let mut fields = ConsultationFields::default();
        fields.set("firstName", "Jane".into()).unwrap();
        fields.set("caseSummary", "Rear-ended on the 405".into()).unwrap();

        let payload = fields.payload();
        let names: Vec<&str> = payload.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "firstName",
                "lastName",
                "email",
                "phone",
                "practiceArea",
                "preferredContact",
                "caseSummary",
                "consentToContact",
            ]
        );
        assert_eq!(payload.text("caseSummary"), "Rear-ended on the 405");
        assert_eq!(payload.entries()[4].section.as_deref(), Some("Your Case"));
        assert_eq!(payload.get("consentToContact"), Some(&FieldValue::Flag(false)));
    }
}
