use clap::Parser;
use planedb::PlaneDb;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Options {
    /// Directory containing ACFTREF.txt and MASTER.txt
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// ICAO address in hex, e.g. A1B2C3
    icao: String,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let options = Options::parse();
    println!("{}", options.icao);

    let db = match PlaneDb::open_in(&options.dir) {
        Ok(db) => db,
        Err(error) => {
            log::warn!("{:#}", anyhow::Error::from(error));
            println!("Could not initialize plane database");
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout().lock();
    db.render(&mut stdout, db.lookup(&options.icao))?;
    stdout.flush()?;

    db.close();
    Ok(())
}
