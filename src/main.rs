//! Homomorphic add / subtract chain demo

use csv::Writer;
use mac_core::{Ciphertext, ModularAdditiveCipher};
use rand::{thread_rng, Rng};
use std::env;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_path = env::args().nth(1).unwrap_or_else(|| "chain_stats.csv".to_string());
    let mut wtr = Writer::from_path(&out_path)?;
    wtr.write_record(["index", "op", "time_us", "outcome"])?;

    let max_ops = 10_000;
    let cipher = ModularAdditiveCipher::default();
    let modulus = cipher.modulus();
    info!(ops = max_ops, out = %out_path, "starting chain");

    let mut rng = thread_rng();
    let mut cur_value: u64 = rng.gen_range(0..modulus);
    let mut acc: Ciphertext = cipher.encrypt(cur_value)?;

    let mut op_times = Vec::with_capacity(max_ops);
    let mut applied = 0;
    let mut rejected = 0;
    let start = Instant::now();

    for i in 0..max_ops {
        let operand: u64 = rng.gen_range(0..modulus / 8);
        let c = cipher.encrypt(operand)?;
        let subtract = rng.gen_bool(0.5);

        let op_start = Instant::now();
        let result = if subtract {
            cipher.subtract(acc, c)
        } else {
            cipher.add(acc, c)
        };
        let elapsed = op_start.elapsed();
        op_times.push(elapsed);

        let op = if subtract { "sub" } else { "add" };
        let outcome = match result {
            Ok(next) => {
                acc = next;
                cur_value = if subtract { cur_value - operand } else { cur_value + operand };
                applied += 1;
                "ok".to_string()
            }
            Err(e) => {
                rejected += 1;
                e.to_string()
            }
        };
        wtr.write_record([
            i.to_string(),
            op.to_string(),
            elapsed.as_micros().to_string(),
            outcome,
        ])?;

        let decrypted = cipher.decrypt(acc)?;
        if decrypted != cur_value {
            warn!(index = i, "chain diverged");
            println!("Operation {i} failed: expected {cur_value}, got {decrypted}");
            break;
        }
    }

    let total_time = start.elapsed();
    println!("\nChain completed:");
    println!("Total time: {total_time:?}");
    println!("Applied operations: {applied}/{max_ops}");
    println!("Rejected operations: {rejected}/{max_ops}");

    if let (Some(max_op), Some(min_op)) = (op_times.iter().max(), op_times.iter().min()) {
        let count = u32::try_from(op_times.len())?;
        let avg_op = op_times.iter().sum::<Duration>() / count;
        println!("\nOperation timing:");
        println!("Average time: {avg_op:?}");
        println!("Maximum time: {max_op:?}");
        println!("Minimum time: {min_op:?}");
    }
    wtr.flush()?;
    Ok(())
}
