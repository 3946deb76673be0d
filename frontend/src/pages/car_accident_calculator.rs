use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::Hero;
use crate::components::sidebar::CtaSidebar;
use crate::config;
use crate::forms::calculator::{self, CarAccidentCalculator, Estimate};
use crate::forms::schemas::CarAccidentFields;
use crate::forms::wizard::{FieldKind, FieldSpec, FormDefinition, FormFields, WizardError};
use crate::scroll::hook::use_scroll_restoration;
use crate::Route;

#[function_component(CarAccidentCalculatorPage)]
pub fn car_accident_calculator_page() -> Html {
    use_scroll_restoration();

    html! {
        <div class="calculator-page">
            <Hero
                title="Car Accident Calculator"
                subtitle={Some("Estimate your accident injury compensation".to_string())}
                image="/assets/car-accident-hero.jpg"
            />
            <div class="calculator-layout">
                <main>
                    <CalculatorWizard />
                </main>
                <CtaSidebar />
            </div>
            <style>
                {r#"
                .calculator-layout {
                    max-width: 1100px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .calculator-options {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .calculator-option {
                    padding: 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(30, 58, 138, 0.2);
                    background: #ffffff;
                    text-align: left;
                    cursor: pointer;
                }
                .calculator-option.selected {
                    border-color: #1e3a8a;
                    background: rgba(30, 58, 138, 0.08);
                }
                .calculator-option small {
                    display: block;
                    color: #6b7280;
                }
                .calculator-range {
                    font-size: 2.5rem;
                    font-weight: 700;
                    text-align: center;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #f8fafc;
                }
                .calculator-nav button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                @media (max-width: 900px) {
                    .calculator-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

pub enum CalculatorMsg {
    Set(&'static str, String),
    Next,
    Back,
    Reset,
}

pub struct CalculatorWizard {
    calculator: Result<CarAccidentCalculator, WizardError>,
}

impl Component for CalculatorWizard {
    type Message = CalculatorMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let calculator = CarAccidentCalculator::new();
        if let Err(e) = &calculator {
            error!("Calculator cannot start: {}", e);
        }
        Self { calculator }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Ok(calculator) = &mut self.calculator else {
            return false;
        };
        match msg {
            CalculatorMsg::Set(name, value) => {
                if let Err(e) = calculator.set(name, &value) {
                    error!("{}: {}", CarAccidentFields::TITLE, e);
                    if config::strict_forms() {
                        panic!("{}: {}", CarAccidentFields::TITLE, e);
                    }
                    return false;
                }
                true
            }
            CalculatorMsg::Next => {
                if !calculator.next() {
                    return false;
                }
                if let Some(estimate) = calculator.estimate() {
                    info!("Car accident estimate {}..{}", estimate.min, estimate.max);
                }
                true
            }
            CalculatorMsg::Back => {
                calculator.back();
                true
            }
            CalculatorMsg::Reset => {
                info!("Calculator reset");
                calculator.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Ok(calculator) = &self.calculator else {
            return html! {
                <p class="calculator-unavailable">
                    {"The calculator is unavailable right now. Call us at "}
                    <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                    {"."}
                </p>
            };
        };
        let link = ctx.link();
        let step = calculator.step();

        let body = match calculator.estimate() {
            Some(estimate) => render_results(ctx, &estimate),
            None => {
                let spec = &CarAccidentFields::STEPS[usize::from(step.saturating_sub(1))];
                let is_last_input = step + 1 == calculator.total_steps();
                html! {
                    <>
                        <h2>{spec.title}</h2>
                        <p class="wizard-blurb">{spec.blurb}</p>
                        { for spec.fields.iter().map(|field| render_input(ctx, calculator.fields(), field)) }
                        <div class="wizard-nav calculator-nav">
                            if step > 1 {
                                <button type="button" class="wizard-back" onclick={link.callback(|_: MouseEvent| CalculatorMsg::Back)}>
                                    {"Back"}
                                </button>
                            }
                            <button
                                type="button"
                                class="wizard-next"
                                disabled={!calculator.can_advance()}
                                onclick={link.callback(|_: MouseEvent| CalculatorMsg::Next)}
                            >
                                { if is_last_input { "Calculate Settlement" } else { "Next" } }
                            </button>
                        </div>
                    </>
                }
            }
        };

        html! {
            <div class="step-wizard calculator">
                <p class="wizard-step-count">
                    {format!("Step {} of {}", step, calculator.total_steps())}
                </p>
                <div class="wizard-progress">
                    <div class="wizard-progress-bar" style={format!("width: {}%;", calculator.progress_percent())}></div>
                </div>
                {body}
            </div>
        }
    }
}

fn render_input(
    ctx: &Context<CalculatorWizard>,
    fields: &CarAccidentFields,
    spec: &'static FieldSpec,
) -> Html {
    let name = spec.name;
    let current = fields.get(name).unwrap_or_default().as_text().to_string();

    match spec.kind {
        FieldKind::Select(values) => html! {
            <div class="wizard-field">
                <label>{spec.label}</label>
                <div class="calculator-options">
                    { for values.iter().map(|value| {
                        let (label, description) = calculator::describe(name, value).unwrap_or((*value, ""));
                        let onclick = ctx
                            .link()
                            .callback(move |_: MouseEvent| CalculatorMsg::Set(name, value.to_string()));
                        html! {
                            <button
                                type="button"
                                class={classes!("calculator-option", (current == *value).then(|| "selected"))}
                                {onclick}
                            >
                                <strong>{label}</strong>
                                <small>{description}</small>
                            </button>
                        }
                    }) }
                </div>
            </div>
        },
        _ => {
            let oninput = ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                CalculatorMsg::Set(name, input.value())
            });
            html! {
                <div class="wizard-field">
                    <label for={format!("calculator-{}", name)}>{spec.label}</label>
                    <input
                        id={format!("calculator-{}", name)}
                        type={spec.kind.input_type()}
                        min="0"
                        value={current}
                        {oninput}
                    />
                </div>
            }
        }
    }
}

fn render_results(ctx: &Context<CalculatorWizard>, estimate: &Estimate) -> Html {
    let on_reset = ctx.link().callback(|_: MouseEvent| CalculatorMsg::Reset);
    html! {
        <div class="calculator-results">
            <h2>{"Your Estimated Settlement Range"}</h2>
            <div class="calculator-range">
                {format!(
                    "{} - {}",
                    calculator::format_dollars(estimate.min),
                    calculator::format_dollars(estimate.max)
                )}
            </div>
            <h4>{"Economic Damages Breakdown"}</h4>
            <ul class="calculator-breakdown">
                <li>{format!("Medical Expenses: {}", calculator::format_dollars(estimate.medical_expenses))}</li>
                <li>{format!("Future Medical Care: {}", calculator::format_dollars(estimate.future_care))}</li>
                <li>{format!("Lost Wages: {}", calculator::format_dollars(estimate.lost_income))}</li>
                <li>{format!("Property Damage: {}", calculator::format_dollars(estimate.property_damage))}</li>
                <li><strong>{format!("Total Economic: {}", calculator::format_dollars(estimate.total_economic))}</strong></li>
            </ul>
            <p>
                {"Your compensation is adjusted for your share of fault under California comparative negligence, and for what the at-fault driver's insurance can pay."}
            </p>
            <p class="calculator-disclaimer">
                {"This estimate is based on typical car accident settlements. Actual compensation depends on the specifics of your case, evidence, insurance limits and negotiation."}
            </p>
            <div class="wizard-nav">
                <Link<Route> to={Route::CaseEvaluation { slug: "car-accidents".to_string() }} classes="wizard-submit">
                    {"Get Free Case Evaluation"}
                </Link<Route>>
                <button type="button" class="wizard-back" onclick={on_reset}>{"Calculate Another Case"}</button>
            </div>
        </div>
    }
}
