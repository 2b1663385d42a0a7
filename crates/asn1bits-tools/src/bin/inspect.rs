use asn1bits_tools::{print_json, BitStringArgs, BitStringReport};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asn1bits-inspect")]
struct Args {
    #[command(flatten)]
    input: BitStringArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let bits = match args.input.bit_string() {
        Ok(bits) => bits,
        Err(e) => {
            eprintln!("inspect failed: {e}");
            std::process::exit(1);
        }
    };
    print_json(&BitStringReport::from(&bits))?;
    Ok(())
}
