use yew::prelude::*;

use crate::components::faq::{Collapsible, FaqList};
use crate::components::hero::Hero;
use crate::components::sidebar::CtaSidebar;
use crate::content::practice_areas::{self, PracticeArea};
use crate::forms::schemas::QuickContactFields;
use crate::forms::step_wizard::StepWizard;
use crate::forms::transport::{RedirectTransport, Transport};
use crate::pages::not_found::NotFound;
use crate::scroll::hook::use_scroll_restoration;

#[derive(Properties, PartialEq)]
pub struct PracticeAreaPageProps {
    pub slug: String,
}

#[function_component(PracticeAreaPage)]
pub fn practice_area_page(props: &PracticeAreaPageProps) -> Html {
    use_scroll_restoration();

    let Some(area) = practice_areas::find(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="practice-area-page">
            { area_content(area) }
            <style>
                {r#"
                .practice-area-layout {
                    max-width: 1200px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .practice-area-overview {
                    font-size: 1.15rem;
                    line-height: 1.8;
                    margin-bottom: 2rem;
                }
                @media (max-width: 900px) {
                    .practice-area-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

/// Everything that belongs to one practice area. Keyed by slug so that
/// moving between areas mounts fresh sections and a fresh quick-contact form.
fn area_content(area: &'static PracticeArea) -> Html {
    // quick contact hands its answers to the full evaluation page
    let transport = Transport::Redirect(RedirectTransport::new(area.evaluation_path()));

    html! {
        <div key={area.slug}>
            <Hero title={area.name.to_string()} subtitle={Some(area.tagline.to_string())} image={area.hero_image.to_string()} />
            <div class="practice-area-layout">
                <main class="practice-area-content">
                    <p class="practice-area-overview">{area.overview}</p>
                    { for area.sections.iter().enumerate().map(|(i, section)| html! {
                        <Collapsible title={section.title.to_string()} open={i == 0}>
                            { for section.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        </Collapsible>
                    }) }
                    <FaqList heading={format!("{} FAQ", area.name)} items={area.faqs} />
                </main>
                <CtaSidebar>
                    <StepWizard<QuickContactFields> {transport} />
                </CtaSidebar>
            </div>
        </div>
    }
}
