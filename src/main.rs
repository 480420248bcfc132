// SPDX-License-Identifier: MIT
//
// gradix — gradient-colored text for the terminal.
//
// This is the demo binary that wires together the crates:
//
//   gradix-gradient → stop math, bracket sampling, step sequences
//   gradix-color    → RGB/HSV types, name + hex parsing, ANSI output
//   gradix-text     → styled trees, the gradient distributor, rendering
//
// Usage:
//
//   gradix                                   showcase of the pipeline
//   gradix COLOR... [PHASE] [-- TEXT...]     gradient TEXT with COLORs
//
// Colors are names ("red", "dark_aqua", "grey") or hex ("#ff5555"); the
// optional PHASE is a number in [-1, 1] rotating the color cycle.

use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process;

use gradix_color::{Rgb, ansi, named};
use gradix_gradient::Gradient;
use gradix_text::{GradientTag, Node, parse_args, render};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let result = if args.is_empty() {
        showcase()
    } else {
        run(&args)
    };
    if let Err(err) = result {
        eprintln!("gradix: {err}");
        process::exit(1);
    }
}

/// Apply a gradient described by CLI arguments to the given text.
fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (tag_args, text) = match args.iter().position(|arg| arg == "--") {
        Some(split) => (&args[..split], args[split + 1..].join(" ")),
        None => (args, String::from("The quick brown fox jumps over the lazy dog")),
    };
    let tag_args: Vec<&str> = tag_args.iter().map(String::as_str).collect();
    let tag = parse_args(&tag_args)?;

    let tree = tag.apply(&Node::text(text));
    let mut stdout = io::stdout().lock();
    render(&mut stdout, &tree)?;
    writeln!(stdout)?;
    Ok(())
}

/// A short tour of everything the crates do.
fn showcase() -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();

    // Discrete sampling: ten swatches between two hex colors, blended
    // channel-wise in RGB.
    let start = Rgb::hex("#06302a").ok_or("bad hex")?;
    let end = Rgb::hex("#ed582a").ok_or("bad hex")?;
    let swatches = Gradient::between(start, end);
    for color in &swatches.generator(10, Rgb::lerp) {
        ansi::fg(&mut stdout, color)?;
        write!(stdout, "██")?;
    }
    ansi::reset(&mut stdout)?;
    writeln!(stdout)?;

    // Per-character distribution in HSV, plain and phase-rotated.
    let text = "A gradient spread across every character of this line";
    for phase in [0.0, 0.25, -0.25] {
        let colors = vec![
            named::lookup("red").ok_or("missing color")?,
            named::lookup("yellow").ok_or("missing color")?,
            named::lookup("blue").ok_or("missing color")?,
        ];
        let tree = GradientTag::new(colors, phase)?.apply(&Node::text(text));
        render(&mut stdout, &tree)?;
        writeln!(stdout)?;
    }

    // Explicit colors win: the middle span keeps its gold override while
    // its siblings take their gradient positions.
    let gold = named::lookup("gold").ok_or("missing color")?;
    let tree = Node::group()
        .with_child(Node::text("overrides "))
        .with_child(Node::text("stay put").with_color(gold))
        .with_child(Node::text(" around the gradient"));
    let tag = parse_args(&["aqua", "light_purple"])?;
    render(&mut stdout, &tag.apply(&tree))?;
    writeln!(stdout)?;

    Ok(())
}
