//! Browser entry point. Trunk builds this binary with the `web` feature.

fn main() {
    #[cfg(feature = "web")]
    chambers::app::mount();
}
