//! NestKV CLI Client
//!
//! Interactive line client: reads commands from stdin, prints the server's
//! JSON response for each.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;
use std::process::ExitCode;

use clap::Parser;

/// NestKV CLI
#[derive(Parser, Debug)]
#[command(name = "nestkv-cli")]
#[command(about = "CLI client for the NestKV key-value store")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:4000")]
    server: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args.server) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(server: &str) -> io::Result<()> {
    let stream = TcpStream::connect(server)?;
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = BufWriter::new(stream);

    eprintln!("connected to {server} (type 'exit' to quit)");

    let stdin = io::stdin();
    let mut response = String::new();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        writeln!(writer, "{line}")?;
        writer.flush()?;

        response.clear();
        if reader.read_line(&mut response)? == 0 {
            eprintln!("server closed the connection");
            break;
        }
        print!("{response}");

        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
    }

    Ok(())
}
