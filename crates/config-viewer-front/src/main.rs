fn main() {
    #[cfg(target_arch = "wasm32")]
    config_viewer_front::start();
}
