//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fruitapp_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("fruitapp_core ping={}", fruitapp_core::ping());
    println!("fruitapp_core version={}", fruitapp_core::core_version());
}
