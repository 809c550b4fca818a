//! mips1 CLI: load a flat MIPS I binary image and run it.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use mips1_executor::{Cpu, Step, REG_NAMES};

/// mips1: MIPS I 32-bit interpreter
#[derive(Parser)]
#[command(name = "mips1")]
#[command(version = "0.1.0")]
#[command(about = "Run a flat big-endian MIPS I binary image", long_about = None)]
struct Cli {
    /// Path to the binary image
    bin: PathBuf,

    /// Program counter at entry
    #[arg(long, value_name = "ADDR", default_value_t = 0)]
    entry: u32,

    /// Maximum instructions to execute (0 = run until halted)
    #[arg(long, value_name = "NUM", default_value_t = 0)]
    max_steps: u64,

    /// Print the register file after execution
    #[arg(long)]
    dump_regs: bool,

    /// Write the final machine state as JSON
    #[arg(long, value_name = "PATH")]
    state_out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut cpu = Cpu::new(cli.entry);
    if let Err(e) = cpu.load_file(&cli.bin) {
        eprintln!("Error loading binary: {}", e);
        std::process::exit(1);
    }

    println!(
        "Loaded {} bytes from {}, entry {:#x}",
        cpu.memory.size(),
        cli.bin.display(),
        cli.entry
    );

    let start = Instant::now();
    let result = if cli.max_steps > 0 {
        cpu.run(cli.max_steps)
    } else {
        cpu.execute().map(|code| Step::Halt { code })
    };

    let elapsed = start.elapsed();
    let steps = cpu.cycles();
    println!(
        "Executed {} steps in {:?} ({:.2} steps/sec)",
        steps,
        elapsed,
        steps as f64 / elapsed.as_secs_f64()
    );

    let failed = match result {
        Ok(Step::Halt { code }) => {
            println!("Program halted with code {}", code);
            false
        }
        Ok(Step::Continue) => {
            println!("Reached step limit of {}", cli.max_steps);
            false
        }
        Err(e) => {
            eprintln!("Execution failed: {}", e);
            true
        }
    };

    if cli.dump_regs {
        dump_registers(&cpu);
    }

    if let Some(out_path) = &cli.state_out {
        match serde_json::to_string_pretty(&cpu.state()) {
            Ok(json) => {
                if let Err(e) = fs::write(out_path, json) {
                    eprintln!("Error writing state: {}", e);
                } else {
                    println!("State saved to {}", out_path.display());
                }
            }
            Err(e) => eprintln!("Error serializing state: {}", e),
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn dump_registers(cpu: &Cpu) {
    println!("pc={:#010x} hi={:#010x} lo={:#010x}", cpu.pc, cpu.hi, cpu.lo);
    for (i, chunk) in cpu.regs.chunks(4).enumerate() {
        let row: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(j, v)| format!("{:>5}={:#010x}", REG_NAMES[i * 4 + j], v))
            .collect();
        println!("{}", row.join("  "));
    }
}
