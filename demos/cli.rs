extern crate chinacoord;
extern crate env_logger;
extern crate failure;

use std::env;

use chinacoord::point::parse_lng_lat;
use chinacoord::{batch, is_in_china, CoordSystem};
use failure::Error;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return help();
    }

    if let Err(error) = run(&args[1], &args[2], &args[3..]) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(from: &str, to: &str, points: &[String]) -> Result<(), Error> {
    let from: CoordSystem = from.parse()?;
    let to: CoordSystem = to.parse()?;

    let inputs = points.iter()
        .map(|it| parse_lng_lat(it))
        .collect::<Result<Vec<_>, _>>()?;

    println!("--- {} -> {}", from, to);

    let outputs = batch::convert_all(&inputs, from, to);
    for (&(lng, lat), (out_lng, out_lat)) in inputs.iter().zip(outputs) {
        let marker = if is_in_china(lng, lat) { "" } else { "  (outside China, unchanged)" };
        println!("{:.6},{:.6}  ->  {:.6},{:.6}{}", lng, lat, out_lng, out_lat, marker);
    }

    Ok(())
}

fn help() {
    println!("usage: cli <from> <to> <lng,lat>...");
    println!();
    println!("systems: wgs84 (gps), gcj02 (amap, tencent), bd09 (baidu)");
}
