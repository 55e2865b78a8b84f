//! Demonstration of a full capture/loop cycle
//!
//! Feeds a 440 Hz tone through a capture pass, then lets the loop play
//! back over silence and prints the level of each second of output.
//!
//! Run with: cargo run --example retain_demo

use sostenido_core::StereoEffect;
use sostenido_retain::{Retain, RetainPhase};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK: usize = 512;

fn rms(signal: &[f32]) -> f32 {
    let sum_sq: f32 = signal.iter().map(|&s| s * s).sum();
    (sum_sq / signal.len() as f32).sqrt()
}

fn main() {
    println!("Sostenido Retain Demo");
    println!("=====================\n");

    let mut retain = Retain::new(SAMPLE_RATE).expect("standard rate fits the tape");
    retain.set_blend(100.0); // loop only, so the playback is easy to hear
    retain.set_trigger(1.0);

    println!(
        "loop: {} samples ({:.1} s), fade: {} samples ({:.1} s)\n",
        retain.loop_samples(),
        retain.loop_samples() as f32 / SAMPLE_RATE,
        retain.fade_samples(),
        retain.fade_samples() as f32 / SAMPLE_RATE,
    );

    let mut out_l = vec![0.0_f32; BLOCK];
    let mut out_r = vec![0.0_f32; BLOCK];
    let mut phase = retain.phase();
    let mut second: Vec<f32> = Vec::new();

    // Ten seconds: the first five capture the tone, the rest loop it.
    for n in 0..(10.0 * SAMPLE_RATE) as usize / BLOCK {
        let input: Vec<f32> = (0..BLOCK)
            .map(|i| {
                let t = (n * BLOCK + i) as f32 / SAMPLE_RATE;
                if retain.phase() == RetainPhase::Looping {
                    0.0 // silence once the loop has taken over
                } else {
                    (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
                }
            })
            .collect();

        retain.process_block(&input, &input, &mut out_l, &mut out_r);
        retain.set_trigger(0.0); // one-shot: keep whatever gets captured

        if retain.phase() != phase {
            phase = retain.phase();
            println!("t = {:5.2} s: entered {:?}", (n * BLOCK) as f32 / SAMPLE_RATE, phase);
        }

        second.extend_from_slice(&out_l);
        if second.len() >= SAMPLE_RATE as usize {
            println!(
                "t = {:5.2} s: output RMS {:.3}",
                (n * BLOCK) as f32 / SAMPLE_RATE,
                rms(&second)
            );
            second.clear();
        }
    }

    println!("\nThe tone keeps sounding from the tape after the input goes silent.");
}
