//! Loopreel - an infinitely-looping image carousel
//! Built with iced; drag, swipe or let it roll

mod app;
mod carousel;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(app::WINDOW_SIZE)
        .antialiasing(true)
        .run()
}
