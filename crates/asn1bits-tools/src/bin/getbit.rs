use asn1bits_tools::{print_json, BitStringArgs};
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "asn1bits-getbit")]
struct Args {
    #[command(flatten)]
    input: BitStringArgs,
    /// Bit position, 0 being the least significant. Repeatable.
    #[arg(long, required = true)]
    pos: Vec<u32>,
}

#[derive(Serialize)]
struct BitReading {
    pos: u32,
    set: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let bits = match args.input.bit_string() {
        Ok(bits) => bits,
        Err(e) => {
            eprintln!("getbit failed: {e}");
            std::process::exit(1);
        }
    };

    let mut readings = Vec::with_capacity(args.pos.len());
    for pos in args.pos {
        match bits.get_bit(pos) {
            Ok(set) => readings.push(BitReading { pos, set }),
            Err(e) => {
                eprintln!("getbit failed: {e}");
                std::process::exit(1);
            }
        }
    }
    print_json(&readings)?;
    Ok(())
}
