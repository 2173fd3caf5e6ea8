fn main() {
    fixonce_launcher::app::cli::run();
}
