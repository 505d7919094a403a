use playbook::{generate_playbook, ContentPools, PipelineError, DEFAULT_PAGE_COUNT};
use std::env;
use std::fs::{self, File};
use std::io::BufWriter;

/// A simple CLI to generate a playbook PDF to a file.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Generate a deterministic marketing playbook PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/output.pdf> [pages] [path/to/pools.json]",
            args[0]
        );
        eprintln!();
        eprintln!("  pages       number of pages to generate (default {})", DEFAULT_PAGE_COUNT);
        eprintln!("  pools.json  optional JSON file overriding the built-in content pools");
        std::process::exit(1);
    }

    let output_path = &args[1];
    let total_pages = match args.get(2) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|e| PipelineError::Config(format!("invalid page count '{}': {}", raw, e)))?,
        None => DEFAULT_PAGE_COUNT,
    };

    let pools = match args.get(3) {
        Some(path) => {
            println!("Loading content pools from {}", path);
            let pools_json = fs::read_to_string(path)?;
            serde_json::from_str::<ContentPools>(&pools_json)?
        }
        None => ContentPools::default(),
    };

    println!("Generating {} pages to {}...", total_pages, output_path);
    let writer = BufWriter::new(File::create(output_path)?);
    generate_playbook(total_pages, &pools, writer)?;

    println!("Successfully generated {}", output_path);
    Ok(())
}
