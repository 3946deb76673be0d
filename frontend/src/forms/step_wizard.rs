use log::{debug, error, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::transport::Transport;
use crate::forms::wizard::{
    FieldKind, FieldSpec, FieldValue, FormDefinition, SubmitOutcome, WizardError, WizardPhase,
    WizardState,
};

#[derive(Properties, PartialEq)]
pub struct StepWizardProps {
    pub transport: Transport,
    #[prop_or_default]
    pub prefill: Vec<(String, String)>,
    #[prop_or_default]
    pub confirmation: Option<String>,
    #[prop_or_default]
    pub on_submitted: Callback<()>,
}

pub enum WizardMsg {
    SetField(&'static str, FieldValue),
    Advance,
    Retreat,
    Submit,
}

pub struct StepWizard<F: FormDefinition> {
    state: Result<WizardState<F>, WizardError>,
    outcome: Option<SubmitOutcome>,
}

impl<F: FormDefinition> Component for StepWizard<F> {
    type Message = WizardMsg;
    type Properties = StepWizardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut fields = F::default();
        for (name, value) in &ctx.props().prefill {
            if let Err(e) = fields.set(name, FieldValue::Text(value.clone())) {
                debug!("Skipping prefill for {}: {}", F::TITLE, e);
            }
        }

        let state = WizardState::from_definition(fields);
        if let Err(e) = &state {
            error!("{} form cannot start: {}", F::TITLE, e);
        }
        Self {
            state,
            outcome: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Ok(state) = &mut self.state else {
            return false;
        };
        match msg {
            WizardMsg::SetField(name, value) => {
                if let Err(e) = state.set_field(name, value) {
                    error!("{} form: {}", F::TITLE, e);
                    if config::strict_forms() {
                        panic!("{} form: {}", F::TITLE, e);
                    }
                    return false;
                }
                true
            }
            WizardMsg::Advance => {
                let before = state.current_step();
                state.advance();
                before != state.current_step()
            }
            WizardMsg::Retreat => {
                let before = state.current_step();
                state.retreat();
                before != state.current_step()
            }
            WizardMsg::Submit => {
                let outcome = state.submit(&ctx.props().transport);
                match &outcome {
                    SubmitOutcome::Sent => {
                        info!("{} submitted", F::TITLE);
                        ctx.props().on_submitted.emit(());
                    }
                    SubmitOutcome::TransportFailed(e) => {
                        warn!("{} submitted but delivery failed: {}", F::TITLE, e);
                        ctx.props().on_submitted.emit(());
                    }
                    SubmitOutcome::NotOnFinalStep | SubmitOutcome::AlreadySubmitted => {
                        debug!("{} submit ignored: {:?}", F::TITLE, outcome);
                        return false;
                    }
                }
                self.outcome = Some(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = match &self.state {
            Ok(state) => state,
            Err(_) => return render_unavailable(),
        };
        let current_step = match state.phase() {
            WizardPhase::Submitted => return self.render_confirmation(ctx),
            WizardPhase::Editing(step) => step,
        };

        let link = ctx.link();
        let step_index = usize::from(current_step.saturating_sub(1));
        let step = &F::STEPS[step_index.min(F::STEPS.len().saturating_sub(1))];
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            WizardMsg::Submit
        });
        let on_back = link.callback(|_: MouseEvent| WizardMsg::Retreat);
        let on_next = link.callback(|_: MouseEvent| WizardMsg::Advance);

        html! {
            <div class="step-wizard">
                <div class="wizard-header">
                    <h3>{F::TITLE}</h3>
                    if state.total_steps() > 1 {
                        <>
                            <p class="wizard-step-count">
                                {format!("Step {} of {}", current_step, state.total_steps())}
                            </p>
                            <div class="wizard-progress">
                                <div class="wizard-progress-bar" style={format!("width: {}%;", state.progress_percent())}></div>
                            </div>
                        </>
                    }
                </div>
                <form class="wizard-form" {onsubmit}>
                    <h4>{step.title}</h4>
                    <p class="wizard-blurb">{step.blurb}</p>
                    { for step.fields.iter().map(|spec| render_field(ctx, state, spec)) }
                    <div class="wizard-nav">
                        if current_step > 1 {
                            <button type="button" class="wizard-back" onclick={on_back}>{"Back"}</button>
                        }
                        if state.is_final_step() {
                            <button type="submit" class="wizard-submit">{"Submit"}</button>
                        } else {
                            <button type="button" class="wizard-next" onclick={on_next}>{"Next"}</button>
                        }
                    </div>
                </form>
                <p class="wizard-privacy">
                    {"All information is confidential and protected by attorney-client privilege."}
                </p>
            </div>
        }
    }
}

fn render_field<F: FormDefinition>(
    ctx: &Context<StepWizard<F>>,
    state: &WizardState<F>,
    spec: &'static FieldSpec,
) -> Html {
    let link = ctx.link();
    let name = spec.name;
    let value = state.fields().get(name).unwrap_or_default();
    let id = format!("wizard-{}", name);

    match spec.kind {
        FieldKind::Checkbox => {
            let onchange = link.callback(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                WizardMsg::SetField(name, FieldValue::Flag(input.checked()))
            });
            html! {
                <label class="wizard-checkbox" for={id.clone()}>
                    <input type="checkbox" {id} checked={value.as_flag()} required={spec.required} {onchange} />
                    {spec.label}
                </label>
            }
        }
        FieldKind::TextArea => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                WizardMsg::SetField(name, FieldValue::Text(input.value()))
            });
            html! {
                <div class="wizard-field">
                    <label for={id.clone()}>{field_label(spec)}</label>
                    <textarea {id} rows="4" value={value.as_text().to_string()} required={spec.required} {oninput} />
                </div>
            }
        }
        FieldKind::Select(options) => {
            let onchange = link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                WizardMsg::SetField(name, FieldValue::Text(select.value()))
            });
            let current = value.as_text().to_string();
            html! {
                <div class="wizard-field">
                    <label for={id.clone()}>{field_label(spec)}</label>
                    <select {id} required={spec.required} {onchange}>
                        <option value="" selected={current.is_empty()}>{"Select an option"}</option>
                        { for options.iter().map(|option| html! {
                            <option value={*option} selected={current == *option}>{*option}</option>
                        }) }
                    </select>
                </div>
            }
        }
        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Tel
        | FieldKind::Date
        | FieldKind::Number => {
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                WizardMsg::SetField(name, FieldValue::Text(input.value()))
            });
            html! {
                <div class="wizard-field">
                    <label for={id.clone()}>{field_label(spec)}</label>
                    <input
                        type={spec.kind.input_type()}
                        {id}
                        value={value.as_text().to_string()}
                        required={spec.required}
                        {oninput}
                    />
                </div>
            }
        }
    }
}

impl<F: FormDefinition> StepWizard<F> {
    fn render_confirmation(&self, ctx: &Context<Self>) -> Html {
        let message = ctx.props().confirmation.clone().unwrap_or_else(|| {
            "Thank you for contacting us. We will review your information and reach out within 24 hours.".to_string()
        });
        html! {
            <div class="step-wizard submitted">
                <h3>{"Thank You"}</h3>
                <p>{message}</p>
                if matches!(self.outcome, Some(SubmitOutcome::TransportFailed(_))) {
                    <p class="wizard-fallback">
                        {"If your email app did not open, call us at "}
                        <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                        {" or write to "}
                        <a href={format!("mailto:{}", config::INTAKE_EMAIL)}>{config::INTAKE_EMAIL}</a>
                        {"."}
                    </p>
                }
            </div>
        }
    }
}

fn render_unavailable() -> Html {
    html! {
        <div class="step-wizard unavailable">
            <p>
                {"This form is unavailable right now. Call us at "}
                <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                {" or write to "}
                <a href={format!("mailto:{}", config::INTAKE_EMAIL)}>{config::INTAKE_EMAIL}</a>
                {"."}
            </p>
        </div>
    }
}

fn field_label(spec: &FieldSpec) -> String {
    if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    }
}
