mod app;
mod logic;
mod models;
mod mvu;
mod ui;

fn main() -> eframe::Result<()> {
    app::run()
}
