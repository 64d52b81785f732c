#[cfg(target_arch = "wasm32")]
pub fn main() {
    portal_web::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
