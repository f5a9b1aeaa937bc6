#[tokio::main]
async fn main() {
    if let Err(e) = unit_converter_lib::run().await {
        eprintln!("unit-converter: {}", e);
        std::process::exit(1);
    }
}
