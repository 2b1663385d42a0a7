use asn1bits_core::encoding::{decode_content, encode_content, Reader, Writer};
use asn1bits_tools::{decode_hex, print_json, BitStringArgs, BitStringReport, ToolError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asn1bits-content")]
struct Args {
    /// Decode these content octets (hex) instead of encoding the input.
    #[arg(long, conflicts_with_all = ["bits", "hex", "value", "len"])]
    decode: Option<String>,
    #[command(flatten)]
    input: BitStringArgs,
}

fn run(args: &Args) -> Result<(), ToolError> {
    if let Some(raw) = &args.decode {
        let octets = decode_hex(raw)?;
        let bits = decode_content(&mut Reader::new(&octets))?;
        return print_json(&BitStringReport::from(&bits));
    }

    let bits = args.input.bit_string()?;
    let mut buf = vec![0u8; bits.value().len() + 1];
    let mut w = Writer::new(&mut buf);
    encode_content(&bits, &mut w)?;
    println!("{}", hex::encode(w.as_written()));
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("content failed: {e}");
        std::process::exit(1);
    }
}
