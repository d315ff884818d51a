use crate::page::image_card::ImageCard;
use crate::view::ResultGrid;
use leptos::prelude::*;

#[component]
pub fn ImageGrid(grid: ResultGrid) -> impl IntoView {
    let row_style = format!(
        "grid-template-columns: repeat({}, minmax(0, 1fr));",
        grid.columns
    );

    view! {
        <div class="result-grid">
            {grid
                .rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="result-row" style=row_style.clone()>
                            {row
                                .into_iter()
                                .map(|cell| view! { <ImageCard cell=cell/> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
