use crate::page::header::Header;
use crate::page::image_grid::ImageGrid;
use crate::view::{ConsoleView, Outcome, NO_RESULTS_NOTICE};
use leptos::prelude::*;

#[component]
pub fn App(model: ConsoleView) -> impl IntoView {
    let ConsoleView {
        query,
        preview,
        outcome,
    } = model;

    let preview = preview.map(|src| {
        view! {
            <figure class="preview">
                <img src=src alt="Uploaded Image Preview" width="200"/>
                <figcaption>"Uploaded Image Preview"</figcaption>
            </figure>
        }
    });

    let outcome = match outcome {
        Outcome::Idle => None,
        Outcome::Results(grid) => Some(
            view! {
                <h3 class="results-title">"Search Results"</h3>
                <ImageGrid grid=grid/>
            }
            .into_any(),
        ),
        Outcome::NoResults => Some(
            view! { <div class="banner warning">{NO_RESULTS_NOTICE}</div> }.into_any(),
        ),
        Outcome::Failed(message) => Some(
            view! { <div class="banner error">{format!("An error occurred: {message}")}</div> }
                .into_any(),
        ),
    };

    view! {
        <main>
            <Header query=query/>
            {preview}
            <section class="results">{outcome}</section>
        </main>
        <footer>
            <p class="footer">"© 2025 Image Search Platform"</p>
        </footer>
    }
}
