use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use geojson_relate::Shape;
use structopt::StructOpt;

#[derive(Debug)]
enum Predicate {
    Intersects,
    Contains,
}

impl FromStr for Predicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intersects" => Ok(Predicate::Intersects),
            "contains" => Ok(Predicate::Contains),
            other => Err(format!("unknown predicate: {}", other)),
        }
    }
}

/// Evaluate a spatial predicate between two GeoJSON shape documents.
#[derive(StructOpt)]
#[structopt(name = "geojson_relate")]
struct Opt {
    /// Predicate to evaluate: intersects or contains
    #[structopt(parse(try_from_str))]
    predicate: Predicate,
    /// File holding the query shape
    query: PathBuf,
    /// File holding the candidate shape
    candidate: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    let query = Shape::from_geojson(&fs::read_to_string(&opt.query)?)?;
    let candidate = Shape::from_geojson(&fs::read_to_string(&opt.candidate)?)?;
    let result = match opt.predicate {
        Predicate::Intersects => query.intersects(&candidate)?,
        Predicate::Contains => query.contains(&candidate)?,
    };
    println!("{}", result);
    Ok(())
}
