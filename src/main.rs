use std::sync::Arc;

use tokio::io::{AsyncWriteExt, BufWriter, Stdout};

use linesum::prelude::*;

#[tokio::main]
async fn main() {
    CliApp::new("linesum")
        .run(|writer| sum_files(writer, std::env::args().collect()))
        .await
}

/// Sum the positive even integers across every input file and print the total
async fn sum_files(mut writer: BufWriter<Stdout>, raw_args: Vec<String>) -> Result<(), AppError> {
    let args = Args::parse(raw_args)?;

    let total = Arc::new(ThreadSafeSum::new());
    let state = Arc::new(CancellationState::new());

    sum_paths(args.inputs, &total, Arc::clone(&state), args.workers).await?;

    // Runs only record failures; surface them here
    if let Err(failure) = state.check() {
        return Err(AppError::RunFailed(failure.to_string()));
    }

    writer.write_all(format!("{}\n", total.value()).as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
