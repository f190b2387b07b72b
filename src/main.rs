fn main() {
    env_logger::init();
    hiss::app::run_app();
}
