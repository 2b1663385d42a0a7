use asn1bits_tools::{print_json, BitStringArgs, BitStringReport};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asn1bits-subbits")]
struct Args {
    #[command(flatten)]
    input: BitStringArgs,
    /// First source position to read.
    #[arg(long, default_value_t = 0)]
    start: u32,
    /// Number of bits to extract.
    #[arg(long)]
    count: u32,
    /// Fail instead of zero-filling when the range runs past the end.
    #[arg(long)]
    checked: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let result = args.input.bit_string().and_then(|bits| {
        if args.checked {
            Ok(bits.checked_sub_bit_string(args.start, args.count)?)
        } else {
            Ok(bits.sub_bit_string(args.start, args.count))
        }
    });

    match result {
        Ok(sub) => print_json(&BitStringReport::from(&sub))?,
        Err(e) => {
            eprintln!("subbits failed: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}
