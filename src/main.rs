use learnstyle::cli::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("learnstyle error: {err}");
        std::process::exit(1);
    }
}
