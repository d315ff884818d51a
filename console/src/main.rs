use clap::Parser;
use env_logger::Env;
use log::info;
use search_console::backend::HttpSearchBackend;
use search_console::console_arguments::ConsoleArguments;
use search_console::routes::{router, AppState};

async fn tokio_main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cla = ConsoleArguments::parse();
    cla.validate()?;

    let backend = HttpSearchBackend::new(cla.endpoint_url()?, cla.request_timeout())?;
    info!("Forwarding searches to {}", backend.endpoint());

    let app_state = AppState {
        backend,
        settings: cla.settings(),
    };
    let app = router(app_state, &cla.static_dir, cla.max_upload_bytes);

    let addr = cla.get_socket_addr()?;
    info!("Search console running on http://{}", addr);
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(tokio_main())
}
