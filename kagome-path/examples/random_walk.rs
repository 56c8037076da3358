//! Kyoto path model walkthrough
//!
//! Replays hand-checked walks through two level-one realizations of
//! B(Lambda_0) in type A_2^(1), then lets a seeded random walk roam:
//! 1. One-crystal cycle: lazy extension and contraction step by step
//! 2. Mixed cycle: round-robin factors and an infeasible lowering
//! 3. Random walk: how often paths grow and shrink in practice
//!
//! Run: cargo run --example random_walk -p kagome-path

use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use kagome_crystal::KirillovReshetikhinCrystal;
use kagome_path::shared_model;
use kagome_root::{CartanType, Weight};

fn main() -> Result<()> {
    println!("╔══════════════════════════════════════════════════╗");
    println!("║        Kagome - Kyoto Path Model Demo            ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║ Cartan type:  A_2^(1), level one                 ║");
    println!("║ Crystals:     Kirillov-Reshetikhin B^{{r,1}}       ║");
    println!("║ Paths:        finite heads over a ground tail    ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    part_single_cycle()?;
    part_mixed_cycle()?;
    part_random_walk()?;
    Ok(())
}

// ─── Part 1: one-crystal cycle ──────────────────

fn part_single_cycle() -> Result<()> {
    println!("━━━ Part 1: cycle [B^{{1,1}}] ━━━");
    let crystal = Arc::new(KirillovReshetikhinCrystal::column(CartanType::a(2), 1)?);
    let model = shared_model(vec![crystal], Weight::fundamental(3, 0))?;
    println!("  {model}");

    let mut path = model.module_generator();
    println!("  start  {path}   weight {}", path.weight());
    for i in [0, 1, 2, 2] {
        path = path.f(i).context("documented lowering applies")?;
        println!("  f_{i} -> {path}   (len {})", path.len());
    }
    for i in [2, 2, 1, 0] {
        path = path.e(i).context("raising walks the same string back")?;
        println!("  e_{i} -> {path}   (len {})", path.len());
    }
    println!();
    Ok(())
}

// ─── Part 2: mixed cycle ──────────────────

fn part_mixed_cycle() -> Result<()> {
    println!("━━━ Part 2: cycle [B^{{1,1}}, B^{{2,1}}, B^{{1,1}}] ━━━");
    let ct = CartanType::a(2);
    let b11 = Arc::new(KirillovReshetikhinCrystal::column(ct, 1)?);
    let b21 = Arc::new(KirillovReshetikhinCrystal::column(ct, 2)?);
    let model = shared_model(vec![b11.clone(), b21, b11], Weight::fundamental(3, 0))?;
    println!("  {model}");

    let mg = model.module_generator();
    let low = mg
        .f_string(&[0, 1, 2, 2])
        .context("documented lowering applies")?;
    println!("  f_0 f_1 f_2 f_2 -> {low}");
    match mg.f_string(&[0, 1, 2, 2, 2]) {
        Some(path) => println!("  unexpected fifth lowering: {path}"),
        None => println!("  f_0 f_1 f_2 f_2 f_2 -> no unmatched minus, the walk stops"),
    }
    let deep = mg
        .f_string(&[0, 1, 2, 2, 1, 0, 0, 2])
        .context("documented lowering applies")?;
    println!("  eight lowerings    -> {deep}");
    println!("  factors drawn round-robin from the cycle: len {}", deep.len());
    println!();
    Ok(())
}

// ─── Part 3: seeded random walk ──────────────────

fn part_random_walk() -> Result<()> {
    println!("━━━ Part 3: random walk on [B^{{1,1}}, B^{{2,1}}] ━━━");
    let ct = CartanType::a(2);
    let b11 = Arc::new(KirillovReshetikhinCrystal::column(ct, 1)?);
    let b21 = Arc::new(KirillovReshetikhinCrystal::column(ct, 2)?);
    let model = shared_model(vec![b11, b21], Weight::fundamental(3, 1))?;
    println!("  {model}");

    let mut rng = SmallRng::seed_from_u64(20260822);
    let colors = model.index_set();
    let mut path = model.module_generator();
    let mut lowerings = 0u32;
    let mut raisings = 0u32;
    let mut extensions = 0u32;
    let mut contractions = 0u32;
    for _ in 0..2000 {
        let i = colors[rng.gen_range(0..colors.len())];
        if rng.gen_bool(0.5) {
            if let Some(next) = path.f(i) {
                lowerings += 1;
                if next.len() > path.len() {
                    extensions += 1;
                }
                path = next;
            }
        } else if let Some(next) = path.e(i) {
            raisings += 1;
            if next.len() < path.len() {
                contractions += 1;
            }
            path = next;
        }
    }
    println!("  2000 attempted steps: {lowerings} lowerings ({extensions} extended the path)");
    println!("                        {raisings} raisings ({contractions} contracted it)");
    println!("  final path {path}");
    println!("  final length {}   weight {}", path.len(), path.weight());
    Ok(())
}
