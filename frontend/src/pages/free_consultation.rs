use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::sidebar::CtaSidebar;
use crate::config;
use crate::forms::schemas::ConsultationFields;
use crate::forms::step_wizard::StepWizard;
use crate::forms::transport::{MailtoTransport, Transport};
use crate::scroll::hook::use_scroll_restoration;

#[function_component(FreeConsultation)]
pub fn free_consultation() -> Html {
    use_scroll_restoration();

    let transport = Transport::Mailto(MailtoTransport::new(
        config::INTAKE_EMAIL,
        "Free Consultation Request",
    ));

    html! {
        <div class="free-consultation-page">
            <Hero
                title="Free Consultation"
                subtitle={Some("Speak with an attorney about your case at no cost.".to_string())}
                image="/assets/consultation-hero.jpg"
            />
            <div class="free-consultation-layout">
                <main>
                    <StepWizard<ConsultationFields>
                        {transport}
                        confirmation={Some("Thank you. An attorney will contact you using your preferred method within one business day.".to_string())}
                    />
                </main>
                <CtaSidebar />
            </div>
            <style>
                {r#"
                .free-consultation-layout {
                    max-width: 1100px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                @media (max-width: 900px) {
                    .free-consultation-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
