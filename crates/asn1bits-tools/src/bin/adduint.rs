use asn1bits_tools::{print_json, BitStringArgs, BitStringReport};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asn1bits-adduint")]
struct Args {
    #[command(flatten)]
    input: BitStringArgs,
    /// Amount to add; the sum wraps at the bit length.
    #[arg(long)]
    add: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut bits = match args.input.bit_string() {
        Ok(bits) => bits,
        Err(e) => {
            eprintln!("adduint failed: {e}");
            std::process::exit(1);
        }
    };
    if bits.len() > 64 {
        log::warn!("{}-bit string is wider than u64; high bits are dropped", bits.len());
    }
    bits.add_uint(args.add);
    print_json(&BitStringReport::from(&bits))?;
    Ok(())
}
