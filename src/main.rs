use tunedeck::{
    ui::app::App,
    util::{hook::install_hooks, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let mut app = App::new();
    if let Ok(route) = std::env::var("TUNEDECK_START_SCREEN") {
        app.set_start_screen(&route);
    }
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    install_hooks()?;
    initialize_logging()
}
