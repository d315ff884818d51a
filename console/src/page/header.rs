use crate::upload::ACCEPTED_EXTENSIONS;
use leptos::prelude::*;

#[component]
pub fn Header(query: String) -> impl IntoView {
    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    view! {
        <header>
            <h1 class="main-title">"Image Search Platform"</h1>
            <p class="subtitle">"Powered by Advanced AI Technology"</p>
        </header>
        <form
            id="search-form"
            class="search-container"
            method="post"
            action="/search"
            enctype="multipart/form-data"
        >
            <div class="search-fields">
                <label class="query-field">
                    <span>"🔍 Search for Images"</span>
                    <input
                        type="text"
                        name="query"
                        value=query
                        placeholder="e.g., majestic mountains, serene lakes"
                        title="Enter a descriptive keyword or phrase"
                        autocomplete="off"
                    />
                </label>
                <label class="image-field">
                    <span>"📷 Upload an Image"</span>
                    <input
                        type="file"
                        name="image"
                        accept=accept
                        title="Upload an image to find similar ones"
                    />
                </label>
            </div>
            <button id="search-button" class="search-button" type="submit">
                "Search Now"
            </button>
        </form>
        <div id="spinner" class="spinner idle">
            <span class="spinner-wheel"></span>
            <span>"Searching for images..."</span>
        </div>
    }
}
