use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::FaqList;
use crate::components::hero::Hero;
use crate::config;
use crate::content::blog_posts;
use crate::content::practice_areas::{Faq, PRACTICE_AREAS};
use crate::scroll::hook::use_scroll_restoration;
use crate::Route;

const GENERAL_FAQS: &[Faq] = &[
    Faq {
        question: "How much does a consultation cost?",
        answer: "Nothing. Consultations are free and we work on contingency, so you pay no fees unless we recover compensation for you.",
    },
    Faq {
        question: "How soon should I contact a lawyer?",
        answer: "As soon as possible. Evidence disappears and legal deadlines start running from the day of the injury.",
    },
    Faq {
        question: "Will my case go to trial?",
        answer: "Most cases settle. We prepare every case as if it will be tried, which is what moves insurers to pay fair value.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_restoration();

    html! {
        <div class="home-page">
            <Hero
                title={config::FIRM_NAME.to_string()}
                subtitle={Some("Personal injury lawyers fighting for injured Californians. No fees unless we win.".to_string())}
                image="/assets/home-hero.jpg"
            >
                <div class="hero-actions">
                    <Link<Route> to={Route::FreeConsultation} classes="hero-cta">
                        {"Get a Free Consultation"}
                    </Link<Route>>
                    <a class="hero-phone" href={config::PHONE_HREF}>{format!("Call {}", config::PHONE_DISPLAY)}</a>
                </div>
            </Hero>

            <section class="practice-area-grid">
                <h2>{"Practice Areas"}</h2>
                <div class="cards">
                    { for PRACTICE_AREAS.iter().map(|area| html! {
                        <Link<Route> to={Route::PracticeArea { slug: area.slug.to_string() }} classes="practice-card">
                            <h3>{area.name}</h3>
                            <p>{area.tagline}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section class="latest-posts">
                <h2>{"From the Blog"}</h2>
                <div class="cards">
                    { for blog_posts::latest(3).into_iter().map(|post| html! {
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="post-card">
                            <span class="post-category">{post.category}</span>
                            <h3>{post.title}</h3>
                            <p>{post.excerpt}</p>
                            <span class="post-date">{post.display_date()}</span>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <FaqList items={GENERAL_FAQS} />

            <style>
                {r#"
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }
                .hero-cta, .hero-phone {
                    padding: 0.9rem 1.6rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    color: #ffffff;
                }
                .hero-cta {
                    background: #f59e0b;
                }
                .hero-phone {
                    border: 1px solid rgba(255, 255, 255, 0.6);
                }
                .practice-area-grid, .latest-posts {
                    max-width: 1100px;
                    margin: 4rem auto;
                    padding: 0 1.5rem;
                }
                .cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .practice-card, .post-card {
                    display: block;
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(30, 58, 138, 0.15);
                    color: inherit;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .practice-card:hover, .post-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 10px 24px rgba(30, 58, 138, 0.12);
                }
                .post-category {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    color: #1e3a8a;
                }
                .post-date {
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}
