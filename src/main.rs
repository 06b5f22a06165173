//! `pixel-pusher <output_path> <prompt>`
//!
//! Renders the sprite for `prompt` and writes it to `output_path`.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> miette::Result<ExitCode> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let mut args = std::env::args_os().skip(1);
    let (Some(output_path), Some(prompt)) = (args.next(), args.next()) else {
        println!("Usage: pixel-pusher <output_path> <prompt>");
        return Ok(ExitCode::from(1));
    };

    let output_path = PathBuf::from(output_path);
    let prompt = prompt.to_string_lossy();

    let sprite = pixel_pusher::generate(&prompt);
    sprite.save(&output_path)?;
    println!("{}", sprite.confirmation(&output_path));

    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr so stdout only carries the usage or result line
#[cfg(feature = "tracing")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
