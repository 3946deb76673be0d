use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    pub image: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero" style={format!("background-image: url('{}');", props.image)}>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1>{&props.title}</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="hero-subtitle">{subtitle}</p>
                }
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 420px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background-size: cover;
                    background-position: center;
                    background-repeat: no-repeat;
                    padding: 8rem 2rem 4rem;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.65);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 900px;
                    text-align: center;
                    color: #ffffff;
                }
                .hero-content h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    opacity: 0.9;
                }
                @media (max-width: 768px) {
                    .hero-content h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
