//! Server-side rendered markup for the console page.

pub mod app;
pub mod header;
pub mod image_card;
pub mod image_grid;

use crate::page::app::App;
use crate::view::ConsoleView;
use leptos::prelude::*;

pub fn render_page(model: ConsoleView) -> String {
    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Image Search Platform"</title>
                <link rel="stylesheet" href="/static/console.css"/>
            </head>
            <body>
                <App model=model/>
                <script src="/static/console.js"></script>
            </body>
        </html>
    };
    format!("<!DOCTYPE html>{}", document.to_html())
}
