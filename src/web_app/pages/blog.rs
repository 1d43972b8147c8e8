// web_app/pages/blog.rs - Article index

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::Badge;
use crate::web_app::data::blog_posts;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <Title text="Blog | EstateEase" />

        <div class="container mx-auto px-4 py-12">
            <div class="mb-12 text-center">
                <h1 class="mb-2 text-4xl font-bold">"Real Estate Insights"</h1>
                <p class="text-muted-foreground">"Guides and market news from our agents."</p>
            </div>

            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                {blog_posts().iter().map(|post| view! {
                    <article class="overflow-hidden rounded-lg border bg-card shadow-sm">
                        <img src=post.image.clone() alt=post.title.clone() class="aspect-video w-full object-cover" />
                        <div class="p-6">
                            <div class="mb-3 flex items-center justify-between text-xs text-muted-foreground">
                                <Badge variant="secondary">{post.category.clone()}</Badge>
                                <span>{post.read_time()}</span>
                            </div>
                            <h2 class="mb-2 text-xl font-semibold">{post.title.clone()}</h2>
                            <p class="mb-4 text-sm text-muted-foreground">{post.excerpt.clone()}</p>
                            <div class="mb-4 flex flex-wrap gap-1">
                                {post.tags.iter().map(|tag| view! {
                                    <span class="rounded bg-muted px-2 py-0.5 text-xs">{tag.clone()}</span>
                                }).collect_view()}
                            </div>
                            <p class="text-xs text-muted-foreground">
                                {post.author.clone()} " · " {post.display_date()}
                            </p>
                        </div>
                    </article>
                }).collect_view()}
            </div>
        </div>
    }
}
