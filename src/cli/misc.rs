use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use cave_logic::{
    builder::read_clauses,
    structures::clause::Clause,
    types::err::{self},
    world::grid::GridWorld,
};

/// A reader for the file at `path`, decompressing `.xz` files when built with the `xz` feature.
fn open(path: &PathBuf) -> Box<dyn BufRead> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            println!("c Could not open {path:?}: {e}");
            std::process::exit(1);
        }
    };

    match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            Box::new(BufReader::new(xz2::read::XzDecoder::new(file)))
        }

        _ => Box::new(BufReader::new(file)),
    }
}

pub fn load_layout(path: &PathBuf) -> Result<GridWorld, err::ErrorKind> {
    let cave = GridWorld::from_reader(open(path))?;
    Ok(cave)
}

pub fn load_clauses(path: &PathBuf) -> Result<Vec<Clause>, err::ErrorKind> {
    read_clauses(open(path))
}
