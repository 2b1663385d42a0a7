use asn1bits_tools::{print_json, BitStringArgs, BitStringReport};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asn1bits-truncate")]
struct Args {
    #[command(flatten)]
    input: BitStringArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let result = args.input.bit_string().and_then(|mut bits| {
        bits.truncate_value()?;
        Ok(bits)
    });

    match result {
        Ok(bits) => print_json(&BitStringReport::from(&bits))?,
        Err(e) => {
            eprintln!("truncate failed: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}
