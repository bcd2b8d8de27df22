// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example forward
fn main() {
    println!("cascade-nn: a forward-only feed-forward network data structure in Rust.");
    println!("Run `cargo run --example forward` to see a propagation demo.");
}
