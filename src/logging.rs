//! Logger bootstrap shared by both binaries. Honors `RUST_LOG`; defaults
//! to `info` so a plain `cargo run` isn't silent but isn't as chatty as
//! `debug`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
