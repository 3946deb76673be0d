use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::go_back::GoBack;
use crate::components::hero::Hero;
use crate::components::sidebar::CtaSidebar;
use crate::config;
use crate::content::practice_areas::{self, PracticeArea};
use crate::forms::schemas::CaseEvaluationFields;
use crate::forms::step_wizard::StepWizard;
use crate::forms::transport::{MailtoTransport, Transport};
use crate::pages::not_found::NotFound;
use crate::scroll::hook::use_scroll_restoration;

/// Contact fields the quick contact form forwards in the query string.
const PREFILL_KEYS: &[&str] = &["firstName", "lastName", "email", "phone"];

/// Reads `?firstName=..&lastName=..&email=..&phone=..` into prefill pairs.
/// Unknown keys, empty values and undecodable values are dropped.
pub fn prefill_from_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| PREFILL_KEYS.contains(key))
        .filter_map(|(key, raw)| {
            let value = urlencoding::decode(&raw.replace('+', " ")).ok()?.trim().to_string();
            (!value.is_empty()).then(|| (key.to_string(), value))
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CaseEvaluationPageProps {
    pub slug: String,
}

#[function_component(CaseEvaluationPage)]
pub fn case_evaluation_page(props: &CaseEvaluationPageProps) -> Html {
    use_scroll_restoration();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    let Some(area) = practice_areas::find(&props.slug) else {
        return html! { <NotFound /> };
    };

    let prefill = prefill_from_query(&query);
    if !prefill.is_empty() {
        debug!("Prefilling {} evaluation with {} fields", area.slug, prefill.len());
    }
    html! {
        <div class="case-evaluation-page">
            <GoBack fallback_path={area.path()} />
            <Hero
                title={format!("{} Case Evaluation", area.name)}
                subtitle={Some("Tell us what happened. An attorney reviews every submission.".to_string())}
                image={area.hero_image.to_string()}
            />
            <div class="case-evaluation-layout">
                { evaluation_form(area, prefill) }
                <CtaSidebar />
            </div>
            <style>
                {r#"
                .case-evaluation-layout {
                    max-width: 1100px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                @media (max-width: 900px) {
                    .case-evaluation-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

/// The intake form for one area, keyed by slug so a new area starts a new wizard.
fn evaluation_form(area: &'static PracticeArea, prefill: Vec<(String, String)>) -> Html {
    let transport = Transport::Mailto(MailtoTransport::new(
        config::INTAKE_EMAIL,
        area.evaluation_subject,
    ));
    html! {
        <main key={area.slug}>
            <StepWizard<CaseEvaluationFields> {transport} {prefill} />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::Key;

    #[test]
    fn evaluation_form_is_keyed_by_area() {
        let scaffolding = practice_areas::find("scaffolding-falls").unwrap();
        let car = practice_areas::find("car-accidents").unwrap();

        let first = evaluation_form(scaffolding, Vec::new());
        let second = evaluation_form(car, vec![("firstName".to_string(), "Jane".to_string())]);
        assert_eq!(first.key(), Some(&Key::from("scaffolding-falls")));
        assert_eq!(second.key(), Some(&Key::from("car-accidents")));
        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn prefill_reads_contact_fields() {
        let prefill = prefill_from_query("?firstName=Jane&lastName=Doe&email=jane%40example.com&phone=555-0100");
        assert_eq!(
            prefill,
            vec![
                ("firstName".to_string(), "Jane".to_string()),
                ("lastName".to_string(), "Doe".to_string()),
                ("email".to_string(), "jane@example.com".to_string()),
                ("phone".to_string(), "555-0100".to_string()),
            ]
        );
    }

    #[test]
    fn prefill_decodes_spaces() {
        let prefill = prefill_from_query("firstName=Mary+Ann&lastName=De%20Luca");
        assert_eq!(prefill[0].1, "Mary Ann");
        assert_eq!(prefill[1].1, "De Luca");
    }

    #[test]
    fn prefill_skips_unknown_and_empty() {
        let prefill = prefill_from_query("?utm_source=ad&firstName=&phone=&lastName=Doe&garbage");
        assert_eq!(prefill, vec![("lastName".to_string(), "Doe".to_string())]);
        assert!(prefill_from_query("").is_empty());
    }
}
