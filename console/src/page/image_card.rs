use crate::view::{CellImage, ResultCell};
use leptos::prelude::*;

#[component]
pub fn ImageCard(cell: ResultCell) -> impl IntoView {
    let ResultCell { image, label } = cell;
    let picture = match image {
        CellImage::Trusted(url) => view! {
            <img src=url alt="Search Result" loading="lazy"/>
        }
        .into_any(),
        CellImage::Withheld(url) => view! {
            <div class="withheld" title=url>"Image withheld"</div>
        }
        .into_any(),
    };

    view! {
        <div class="result-item">
            {picture}
            <p>{label}</p>
        </div>
    }
}
