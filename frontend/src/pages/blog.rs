use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::go_back::GoBack;
use crate::components::sidebar::CtaSidebar;
use crate::content::blog_posts;
use crate::pages::not_found::NotFound;
use crate::scroll::hook::use_scroll_restoration;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_restoration();

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Guides and insights for accident victims in California"}</p>
            </section>
            <section class="blog-list-section">
                { for blog_posts::latest(blog_posts::BLOG_POSTS.len()).into_iter().map(|post| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <span class="blog-category">{post.category}</span>
                            <h2>{post.title}</h2>
                            <p>{post.excerpt}</p>
                            <span class="blog-date">{format!("{} · {}", post.display_date(), post.read_time)}</span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 4rem 1.5rem 2rem;
                }
                .blog-list-section {
                    max-width: 900px;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .blog-post-preview a {
                    display: block;
                    padding: 1.75rem;
                    border-radius: 12px;
                    border: 1px solid rgba(30, 58, 138, 0.15);
                    color: inherit;
                    text-decoration: none;
                }
                .blog-category {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    color: #1e3a8a;
                }
                .blog-date {
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    use_scroll_restoration();

    let Some(post) = blog_posts::find(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="blog-page">
            <GoBack fallback_path="/blog" />
            <div class="blog-layout">
                <article class="blog-content">
                    <span class="blog-category">{post.category}</span>
                    <h1>{post.title}</h1>
                    <p class="blog-meta">{format!("{} · {}", post.display_date(), post.read_time)}</p>
                    { for post.body.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </article>
                <CtaSidebar />
            </div>
            <style>
                {r#"
                .blog-page {
                    padding-top: 74px;
                }
                .blog-layout {
                    max-width: 1100px;
                    margin: 3rem auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .blog-content p {
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }
                .blog-meta {
                    color: #6b7280;
                }
                @media (max-width: 900px) {
                    .blog-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
