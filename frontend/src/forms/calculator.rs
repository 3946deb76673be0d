use log::debug;

use crate::forms::schemas::CarAccidentFields;
use crate::forms::wizard::{FormDefinition, FormFields, WizardError, WizardState};

const BASE_MIN: f64 = 15_000.0;
const BASE_MAX: f64 = 75_000.0;

/// Declares one multiple-choice answer with the factor it applies to the
/// settlement range.
macro_rules! choices {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal, $label:literal, $description:literal, $factor:literal;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $($name::$variant => $description,)*
                }
            }

            pub fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor,)*
                }
            }
        }
    };
}

choices! {
    pub enum InjuryType {
        Whiplash => "whiplash", "Whiplash/Soft Tissue", "Neck and back strain", 1.2;
        BrokenBones => "broken-bones", "Broken Bones", "Fractures requiring treatment", 2.0;
        HeadInjury => "head-injury", "Head/Brain Injury", "Concussion or TBI", 4.0;
        SpinalInjury => "spinal-injury", "Spinal Cord Injury", "Back or spine damage", 5.0;
        InternalInjuries => "internal-injuries", "Internal Injuries", "Organ damage", 3.5;
        Multiple => "multiple", "Multiple Injuries", "Several injury types", 3.2;
    }
}

choices! {
    pub enum InjurySeverity {
        Minor => "minor", "Minor", "Full recovery expected", 1.0;
        Moderate => "moderate", "Moderate", "Extended recovery time", 2.0;
        Severe => "severe", "Severe", "Major medical intervention", 3.5;
        Catastrophic => "catastrophic", "Catastrophic", "Life-changing injuries", 6.0;
    }
}

choices! {
    pub enum AccidentType {
        RearEnd => "rear-end", "Rear-End Collision", "Hit from behind", 1.1;
        HeadOn => "head-on", "Head-On Collision", "Frontal impact", 1.8;
        TBone => "t-bone", "T-Bone/Side Impact", "Side collision", 1.6;
        Rollover => "rollover", "Rollover", "Vehicle flipped", 2.0;
        HitAndRun => "hit-and-run", "Hit and Run", "Driver fled scene", 1.3;
        MultiVehicle => "multi-vehicle", "Multi-Vehicle", "Pileup or chain reaction", 1.4;
    }
}

choices! {
    /// Share of fault carried by the other driver. California reduces the
    /// award by the claimant's own share.
    pub enum FaultShare {
        Full => "100", "100% Other Driver", "Clear liability", 1.0;
        Mostly => "75-99", "75-99% Other Driver", "Mostly at fault", 0.85;
        Shared => "50-74", "50-74% Other Driver", "Shared fault", 0.65;
        UnderHalf => "under-50", "Under 50% Other Driver", "May limit recovery", 0.4;
    }
}

choices! {
    pub enum PermanentImpact {
        NoImpact => "none", "No Permanent Impact", "Full recovery", 1.0;
        Minor => "minor", "Minor Permanent", "Slight limitations", 1.4;
        Significant => "significant", "Significant Permanent", "Major life changes", 2.2;
        TotalDisability => "total-disability", "Total Disability", "Unable to work", 3.5;
    }
}

choices! {
    /// How much of the award the at-fault driver's coverage can pay.
    pub enum InsuranceCoverage {
        Full => "full-coverage", "Full Coverage", "At-fault driver insured", 1.0;
        Minimum => "minimum", "Minimum Coverage", "Basic policy limits", 0.7;
        Uninsured => "uninsured", "Uninsured Driver", "No insurance", 0.5;
        Underinsured => "underinsured", "Underinsured", "Insufficient coverage", 0.6;
    }
}

/// Label and description of a multiple-choice answer, by field name.
pub fn describe(field: &str, value: &str) -> Option<(&'static str, &'static str)> {
    macro_rules! describe_as {
        ($choice:ident) => {
            $choice::from_value(value).map(|c| (c.label(), c.description()))
        };
    }

    match field {
        "injuryType" => describe_as!(InjuryType),
        "injurySeverity" => describe_as!(InjurySeverity),
        "accidentType" => describe_as!(AccidentType),
        "faultPercentage" => describe_as!(FaultShare),
        "permanentImpact" => describe_as!(PermanentImpact),
        "insurance" => describe_as!(InsuranceCoverage),
        _ => None,
    }
}

/// Leading whole dollars of an amount field. Blank, negative or
/// non-numeric input counts as zero.
pub fn parse_amount(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Typed answers of the car accident calculator. Unanswered choices are
/// `None` and leave the range unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarAccidentInputs {
    pub injury_type: Option<InjuryType>,
    pub severity: Option<InjurySeverity>,
    pub accident_type: Option<AccidentType>,
    pub medical_costs: u64,
    pub future_medical: u64,
    pub lost_wages: u64,
    pub vehicle_damage: u64,
    pub fault: Option<FaultShare>,
    pub permanent_impact: Option<PermanentImpact>,
    pub insurance: Option<InsuranceCoverage>,
}

impl From<&CarAccidentFields> for CarAccidentInputs {
    fn from(fields: &CarAccidentFields) -> Self {
        Self {
            injury_type: InjuryType::from_value(&fields.injury_type),
            severity: InjurySeverity::from_value(&fields.injury_severity),
            accident_type: AccidentType::from_value(&fields.accident_type),
            medical_costs: parse_amount(&fields.medical_costs),
            future_medical: parse_amount(&fields.future_medical),
            lost_wages: parse_amount(&fields.lost_wages),
            vehicle_damage: parse_amount(&fields.vehicle_damage),
            fault: FaultShare::from_value(&fields.fault_percentage),
            permanent_impact: PermanentImpact::from_value(&fields.permanent_impact),
            insurance: InsuranceCoverage::from_value(&fields.insurance),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub min: u64,
    pub max: u64,
    pub medical_expenses: u64,
    pub future_care: u64,
    pub lost_income: u64,
    pub property_damage: u64,
    pub total_economic: u64,
}

/// Settlement range the calculator shows: a base range scaled by injury and
/// severity, plus economic damages, scaled by accident type and permanent
/// impact, reduced by fault and then by what insurance can pay.
pub fn estimate(inputs: &CarAccidentInputs) -> Estimate {
    let injury = inputs.injury_type.map_or(1.0, InjuryType::factor);
    let severity = inputs.severity.map_or(1.0, InjurySeverity::factor);
    let accident = inputs.accident_type.map_or(1.0, AccidentType::factor);
    let permanent = inputs.permanent_impact.map_or(1.0, PermanentImpact::factor);
    let fault = inputs.fault.map_or(1.0, FaultShare::factor);
    let insurance = inputs.insurance.map_or(1.0, InsuranceCoverage::factor);

    let medical = inputs.medical_costs as f64;
    let future = inputs.future_medical as f64;
    let wages = inputs.lost_wages as f64;
    let vehicle = inputs.vehicle_damage as f64;

    let mut min = BASE_MIN * injury * severity;
    let mut max = BASE_MAX * injury * severity;
    min += medical * 2.0 + future + wages + vehicle;
    max += medical * 4.0 + future * 2.0 + wages * 2.0 + vehicle;

    for factor in [accident, permanent, fault, insurance] {
        min *= factor;
        max *= factor;
    }

    Estimate {
        min: min.round() as u64,
        max: max.round() as u64,
        medical_expenses: inputs.medical_costs,
        future_care: inputs.future_medical,
        lost_income: inputs.lost_wages,
        property_damage: inputs.vehicle_damage,
        total_economic: inputs
            .medical_costs
            .saturating_add(inputs.future_medical)
            .saturating_add(inputs.lost_wages)
            .saturating_add(inputs.vehicle_damage),
    }
}

/// Whether every required answer of `step` is filled in. The results step
/// never advances.
pub fn step_complete(fields: &CarAccidentFields, step: u8) -> bool {
    let steps = CarAccidentFields::STEPS;
    if step == 0 || usize::from(step) >= steps.len() {
        return false;
    }
    steps[usize::from(step) - 1]
        .fields
        .iter()
        .filter(|spec| spec.required)
        .all(|spec| fields.get(spec.name).map_or(false, |value| !value.is_blank()))
}

/// `$1,234,567`
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Step wizard over [`CarAccidentFields`] whose last step shows the
/// estimate. Moving forward is gated on the current step's answers.
#[derive(Debug, Clone, PartialEq)]
pub struct CarAccidentCalculator {
    wizard: WizardState<CarAccidentFields>,
}

impl CarAccidentCalculator {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self {
            wizard: WizardState::from_definition(CarAccidentFields::default())?,
        })
    }

    pub fn step(&self) -> u8 {
        self.wizard.current_step()
    }

    pub fn total_steps(&self) -> u8 {
        self.wizard.total_steps()
    }

    pub fn progress_percent(&self) -> u8 {
        self.wizard.progress_percent()
    }

    pub fn fields(&self) -> &CarAccidentFields {
        self.wizard.fields()
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), WizardError> {
        self.wizard.set_field(name, value.into())
    }

    pub fn can_advance(&self) -> bool {
        step_complete(self.wizard.fields(), self.wizard.current_step())
    }

    /// Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            debug!("Calculator step {} is incomplete", self.wizard.current_step());
            return false;
        }
        self.wizard.advance();
        true
    }

    pub fn back(&mut self) {
        self.wizard.retreat();
    }

    pub fn reset(&mut self) {
        self.wizard.restart();
    }

    /// Available once the results step is reached.
    pub fn estimate(&self) -> Option<Estimate> {
        self.wizard
            .is_final_step()
            .then(|| estimate(&CarAccidentInputs::from(self.wizard.fields())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soft_tissue_rear_end() -> CarAccidentInputs {
        CarAccidentInputs {
            injury_type: Some(InjuryType::Whiplash),
            severity: Some(InjurySeverity::Minor),
            accident_type: Some(AccidentType::RearEnd),
            fault: Some(FaultShare::Full),
            permanent_impact: Some(PermanentImpact::NoImpact),
            insurance: Some(InsuranceCoverage::Full),
            ..CarAccidentInputs::default()
        }
    }

    fn fill(calculator: &mut CarAccidentCalculator, answers: &[(&str, &str)]) {
        for (name, value) in answers {
            calculator.set(name, value).unwrap();
        }
    }

    const STEP_ONE: &[(&str, &str)] = &[
        ("injuryType", "broken-bones"),
        ("injurySeverity", "moderate"),
        ("accidentType", "head-on"),
    ];

    const STEP_TWO: &[(&str, &str)] = &[
        ("medicalCosts", "10000"),
        ("futureMedical", "5000"),
        ("lostWages", "8000"),
        ("vehicleDamage", "12000"),
        ("faultPercentage", "75-99"),
        ("permanentImpact", "minor"),
        ("insurance", "minimum"),
    ];

    #[test]
    fn soft_tissue_without_costs() {
        let result = estimate(&soft_tissue_rear_end());
        assert_eq!((result.min, result.max), (19_800, 99_000));
        assert_eq!(result.total_economic, 0);
    }

    #[test]
    fn unanswered_choices_leave_base_range() {
        let result = estimate(&CarAccidentInputs::default());
        assert_eq!((result.min, result.max), (15_000, 75_000));
    }

    #[test]
    fn economic_damages_are_added_before_scaling() {
        let inputs = CarAccidentInputs {
            medical_costs: 1_000,
            future_medical: 500,
            lost_wages: 200,
            vehicle_damage: 300,
            ..CarAccidentInputs::default()
        };
        let result = estimate(&inputs);
        assert_eq!(result.min, 15_000 + 2_000 + 500 + 200 + 300);
        assert_eq!(result.max, 75_000 + 4_000 + 1_000 + 400 + 300);
        assert_eq!(result.total_economic, 2_000);
    }

    #[test]
    fn fault_and_insurance_reduce_the_range() {
        let inputs = CarAccidentInputs {
            fault: Some(FaultShare::UnderHalf),
            insurance: Some(InsuranceCoverage::Uninsured),
            ..CarAccidentInputs::default()
        };
        let result = estimate(&inputs);
        assert_eq!((result.min, result.max), (3_000, 15_000));
    }

    #[test]
    fn amounts_read_leading_whole_dollars() {
        assert_eq!(parse_amount("12000"), 12_000);
        assert_eq!(parse_amount(" 2500.75"), 2_500);
        assert_eq!(parse_amount("12,000"), 12);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("-40"), 0);
    }

    #[test]
    fn choices_round_trip_their_values() {
        for value in InjuryType::VALUES {
            assert_eq!(InjuryType::from_value(value).map(|_| *value), Some(*value));
        }
        assert_eq!(FaultShare::from_value("75-99"), Some(FaultShare::Mostly));
        assert_eq!(InsuranceCoverage::from_value("none"), None);
        assert_eq!(
            describe("accidentType", "t-bone"),
            Some(("T-Bone/Side Impact", "Side collision"))
        );
        assert_eq!(describe("accidentType", "bicycle"), None);
    }

    #[test]
    fn dollars_are_grouped_by_thousands() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(99_000), "$99,000");
        assert_eq!(format_dollars(1_234_567), "$1,234,567");
    }

    #[test]
    fn calculator_gates_each_step() {
        let mut calculator = CarAccidentCalculator::new().unwrap();
        assert_eq!(calculator.total_steps(), 3);
        assert!(!calculator.next());
        assert_eq!(calculator.step(), 1);

        fill(&mut calculator, &STEP_ONE[..2]);
        assert!(!calculator.can_advance());
        fill(&mut calculator, STEP_ONE);
        assert!(calculator.next());
        assert_eq!(calculator.step(), 2);
        assert!(calculator.estimate().is_none());

        // future medical costs are optional
        fill(&mut calculator, &[("medicalCosts", "10000")]);
        assert!(!calculator.next());
        fill(
            &mut calculator,
            &STEP_TWO.iter().copied().filter(|(name, _)| *name != "futureMedical").collect::<Vec<_>>(),
        );
        assert!(calculator.next());
        assert_eq!(calculator.step(), 3);
        assert!(!calculator.next());
    }

    #[test]
    fn calculator_estimates_on_results_step() {
        let mut calculator = CarAccidentCalculator::new().unwrap();
        fill(&mut calculator, STEP_ONE);
        calculator.next();
        fill(&mut calculator, STEP_TWO);
        calculator.next();

        let result = calculator.estimate().unwrap();
        assert_eq!((result.min, result.max), (157_437, 566_773));
        assert_eq!(result.total_economic, 35_000);

        calculator.back();
        assert_eq!(calculator.step(), 2);
        assert_eq!(calculator.fields().lost_wages, "8000");
    }

    #[test]
    fn reset_starts_over() {
        let mut calculator = CarAccidentCalculator::new().unwrap();
        fill(&mut calculator, STEP_ONE);
        calculator.next();
        calculator.reset();
        assert_eq!(calculator.step(), 1);
        assert_eq!(calculator.fields(), &CarAccidentFields::default());
    }
}
