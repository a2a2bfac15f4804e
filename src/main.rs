fn main() {
    if let Err(err) = stats_card_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
