#[tokio::main]
async fn main() {
    if let Err(err) = werger_lib::run().await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
