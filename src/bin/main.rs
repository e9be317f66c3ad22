//! # Demonstration binary
//!
//! Prints a representative run over the public API. The library itself never depends on
//! this binary being present.
use clap::{App, Arg};

use replane::number::Fraction;
use replane::{Line, Point};

fn main() {
    let matches = App::new("replane")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demonstrates the fraction and plane geometry value types")
        .arg(
            Arg::new("topic")
                .about("Which demonstration to run")
                .possible_values(&["fraction", "geometry", "all"])
                .default_value("all"),
        )
        .get_matches();

    match matches.value_of("topic").unwrap() {
        "fraction" => fraction_demo(),
        "geometry" => geometry_demo(),
        _ => {
            fraction_demo();
            println!();
            geometry_demo();
        },
    }
}

fn fraction_demo() {
    println!("=== Fractions ===");

    let f1 = Fraction::new(3, 4).unwrap();
    let f2 = Fraction::new(2, 5).unwrap();
    println!("f1 = {}", f1);
    println!("f2 = {}", f2);

    println!("{} + {} = {}", f1, f2, f1 + f2);
    println!("{} - {} = {}", f1, f2, f1 - f2);
    println!("{} * {} = {}", f1, f2, f1 * f2);
    println!("{} / {} = {}", f1, f2, f1 / f2);

    println!("{} + 2 = {}", f1, f1 + 2);
    println!("3 - {} = {}", f1, 3 - f1);

    println!("{} == 6/8: {}", f1, f1 == Fraction::new(6, 8).unwrap());
    println!("{} < {}: {}", f1, f2, f1 < f2);

    println!("reciprocal of {} = {}", f1, f1.reciprocal().unwrap());
    let improper = Fraction::new(7, 3).unwrap();
    println!("{} as mixed number: {:?}", improper, improper.as_mixed_number());
    println!("from_float(0.75) = {}", Fraction::from_float(0.75, 10_000).unwrap());
    println!("{}^2 = {}", f1, f1.pow(2).unwrap());
    println!("{}^-1 = {}", f1, f1.pow(-1).unwrap());
}

fn geometry_demo() {
    println!("=== Plane geometry ===");

    let line = Line::new(2.0, 6.0, 6.0);
    let point = Point::new(1.0, 2.0);
    println!("line: {}", line);
    println!("point: {}", point);
    println!("line contains point: {}", line.contains_point(&point));
    println!(
        "shortest distance from point to line: {}",
        line.shortest_distance_to_point(&point).unwrap(),
    );

    let other = Line::new(1.0, -6.0, 12.0);
    match line.intersection_with(&other) {
        Some(intersection) => println!("intersection with {}: {}", other, intersection),
        None => println!("no intersection with {} (parallel)", other),
    }

    println!("projection of {}: {}", point, line.project_point(&point).unwrap());
    println!("unit vector of (3, 4): {}", Point::new(3.0, 4.0).normalize().unwrap());
    println!(
        "(1, 0) rotated by pi/2: {}",
        Point::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2),
    );
}
