use yew::prelude::*;

use crate::content::practice_areas::Faq;

#[derive(Properties, PartialEq)]
pub struct CollapsibleProps {
    pub title: String,
    #[prop_or_default]
    pub open: bool,
    pub children: Children,
}

#[function_component(Collapsible)]
pub fn collapsible(props: &CollapsibleProps) -> Html {
    let is_open = use_state(|| props.open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("collapsible", if *is_open { "open" } else { "" })}>
            <button class="collapsible-title" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{&props.title}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="collapsible-body">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    #[prop_or_else(|| "Frequently Asked Questions".to_string())]
    pub heading: String,
    pub items: &'static [Faq],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <section class="faq-section">
            <h2>{&props.heading}</h2>
            { for props.items.iter().map(|faq| html! {
                <Collapsible title={faq.question.to_string()}>
                    <p>{faq.answer}</p>
                </Collapsible>
            }) }
            <style>
                {r#"
                .faq-section {
                    max-width: 900px;
                    margin: 0 auto 3rem;
                }
                .collapsible {
                    border-bottom: 1px solid rgba(30, 58, 138, 0.15);
                }
                .collapsible-title {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .collapsible-body {
                    padding: 0 0 1.25rem;
                    line-height: 1.7;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
