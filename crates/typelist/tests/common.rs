#[allow(unused)]
pub fn init() {
    let _ = dotenv::dotenv();
    let _ = pretty_env_logger::try_init_timed();
}
