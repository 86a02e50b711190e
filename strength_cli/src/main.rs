//! # TrailCalc CLI Application
//!
//! Terminal front end for the strength engine. Prompts for a container
//! chassis rail, runs the frame calculation, and prints the sheet figures
//! plus the JSON form of the result for piping into other tools.

use std::io::{self, BufRead, Write};

use strength_core::calculations::frame::{calculate, FrameInput};
use strength_core::materials::SteelGrade;
use strength_core::section::CrossSection;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("TrailCalc CLI - Trailer/Chassis Strength Calculator");
    println!("===================================================");
    println!();
    println!("Container chassis rail, end supported.");
    println!();

    let container_kg = prompt_f64("Container weight (kg) [8000]: ", 8000.0);
    let span_mm = prompt_f64("Rail length (mm) [10000]: ", 10_000.0);
    let front_mm = prompt_f64("Front seat offset (mm) [1000]: ", 1000.0);
    let rear_mm = prompt_f64("Rear seat offset (mm) [1000]: ", 1000.0);
    let width_mm = prompt_f64("Rail outer width B (mm) [100]: ", 100.0);
    let height_mm = prompt_f64("Rail outer height H (mm) [150]: ", 150.0);
    let inner_w_mm = prompt_f64("Rail inner width b (mm) [80]: ", 80.0);
    let inner_h_mm = prompt_f64("Rail inner height h (mm) [130]: ", 130.0);

    println!();
    println!("Calculating with SS400 strengths...");
    println!();

    let section = CrossSection::HollowRect {
        width_mm,
        height_mm,
        inner_width_mm: inner_w_mm,
        inner_height_mm: inner_h_mm,
    };

    let input = match FrameInput::container_end_supported(
        "CLI rail",
        container_kg,
        span_mm,
        front_mm,
        rear_mm,
        section,
        SteelGrade::SS400.properties(),
    ) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  FRAME CALCULATION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Container: {:.0} kg on {:.0} mm rail", container_kg, span_mm);
            println!(
                "  Section:   hollow rect {:.0}x{:.0} / {:.0}x{:.0} mm",
                width_mm, height_mm, inner_w_mm, inner_h_mm
            );
            println!("  Material:  SS400");
            println!();
            println!("Demand:");
            println!(
                "  R_A = {:.1} kg, R_B = {:.1} kg",
                result.reaction_a_kg, result.reaction_b_kg
            );
            println!(
                "  Mmax = {:.1} kg·cm at x = {:.0} mm",
                result.m_max_kg_cm, result.m_max_position_mm
            );
            println!("  Z = {:.2} cm³", result.z_eff_cm3);
            println!("  σ = {:.2} kg/cm²", result.sigma_kg_cm2);
            println!();
            println!("Safety (load x{:.1}):", result.safety.amplification);
            println!(
                "  Break: {:.2} (> 1.6) {}",
                result.safety.sf_break,
                status_icon(result.safety.ok_break)
            );
            println!(
                "  Yield: {:.2} (> 1.3) {}",
                result.safety.sf_yield,
                status_icon(result.safety.ok_yield)
            );
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {} (governs: {})",
                if result.passes() { "PASS" } else { "FAIL" },
                result.safety.governing_condition()
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
