use kabu::{
    cli::{Cli, CliHandler},
    error::KabuError,
};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    // Create and run the CLI handler
    let handler = CliHandler::new(cli);

    // Execute the analysis pipeline
    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", handler.format_error(&e));
            match e {
                KabuError::MissingConfiguration { .. } => 2, // Configuration incomplete
                KabuError::Authentication(_) => 3,           // Credential rejected
                KabuError::Api(_) => 4,                      // Remote service failure
                KabuError::Network(_) => 5,                  // Connection failed or timed out
                KabuError::EmptyResponse => 6,               // Nothing usable returned
                _ => 1,                                      // General error
            }
        }
    };

    process::exit(exit_code);
}
