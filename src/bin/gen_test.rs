//! Synthetic transcript generator for benchmarking chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [seed]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt 7

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "😘", "🤔", "🙄", "😱", "🤯", "💀", "👻", "🤖", "🦄", "🌈", "🔥",
    "👍", "🙏", "🎉", "💯",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Rahul Sharma",
    "Priya",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
    "+91 98765 43210",
];

const WORDS: &[&str] = &[
    "chai", "kal", "milte", "hain", "office", "party", "yaar", "kya", "scene", "movie", "tonight",
    "done", "bhai", "call", "me", "later", "ok", "the", "is", "haan", "nahi", "pizza", "match",
];

const NOTIFICATIONS: &[&str] = &[
    "Alice added Bob",
    "Priya left",
    "Rahul Sharma changed the group description",
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Иван joined using this group's invite link",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(1);

    println!("chatlens transcript generator");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Seed:     {}", seed);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer
    let mut rng = StdRng::seed_from_u64(seed);

    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    // Exports often begin with a line that has no stamp.
    let header = "Chat export generated for benchmarking\n";
    writer.write_all(header.as_bytes())?;
    bytes_written += header.len();

    for i in 0..count {
        let line = format!("{}{}\n", stamp(i), entry(&mut rng, i));
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\nDone!");
    println!("   Size:  {:.2} MB", mb);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

/// A valid `D/M/YY, H:MM - ` stamp; the year switches between two and four
/// digits so both forms are exercised.
fn stamp(index: usize) -> String {
    let day = (index / 1440) % 28 + 1;
    let month = (index / 40_320) % 12 + 1;
    let hour = (index / 60) % 24;
    let minute = index % 60;
    if index % 2 == 0 {
        format!("{}/{}/23, {}:{:02} - ", day, month, hour, minute)
    } else {
        format!("{}/{}/2023, {}:{:02} - ", day, month, hour, minute)
    }
}

fn entry(rng: &mut impl Rng, index: usize) -> String {
    let sender = SENDERS.choose(rng).copied().unwrap_or("Alice");

    match index % 20 {
        // System notifications have no sender prefix
        0 => NOTIFICATIONS.choose(rng).copied().unwrap_or("Alice left").to_string(),

        1 | 2 => format!("{}: <Media omitted>", sender),

        3 => format!("{}: see https://example.com/post/{} and www.example.org", sender, index),

        4 => {
            let emojis: String = (0..rng.gen_range(1..=8))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{}: {}", sender, emojis)
        }

        // Multi-line body
        5 => format!("{}: {}\n{}", sender, sentence(rng), sentence(rng)),

        // Colon inside the body
        6 => format!("{}: time: {}:{:02}", sender, index % 24, index % 60),

        _ => format!("{}: {}", sender, sentence(rng)),
    }
}

fn sentence(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..=12);
    (0..len)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}
