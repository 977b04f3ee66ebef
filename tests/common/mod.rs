//! Shared fixtures: small CSV datasets written to a temp directory.
#![allow(dead_code)]

use grid_map::config::{Config, DataConfig, LoggingConfig, NetworkConfig, ServerConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const TRANSPOWER_SITES: &str = "\
MXLOCATION,X,Y,type,description
AHA,1751478,5921654,Substation,Albany
DOB,1756000,5918000,Substation,Dobson
HEN,1745000,5935000,Switching Station,Henderson
BAD,not-a-number,5935000,Substation,Broken row
";

pub const TRANSPOWER_LINES: &str = "\
MXLOCATION,designvolt,type,description
AHA-DOB-A,220,Line,Albany - Dobson A
AHA-HEN-A,110,Line,Albany - Henderson A
AHA-XYZ-A,220,Line,Albany - nowhere
BROKEN,220,Line,No delimiter
";

pub const VECTOR_SITES: &str = "\
OBJECTID,Primary Substation Name,x,y
1,BROOKBY 33kV,1782000,5905000
2,MARAETAI 33/11kV,1785000,5912000
";

pub const VECTOR_FEEDERS: &str = "\
Feeder Name,OPVOLTAGE_,Shape__Length
BKBY H02 - MARA H06,11kV,2500
BKBY H02 - ZZZZ H01,11kV,900
";

pub const INDEX_HTML: &str = "<html><body><div id=\"map\"></div></body></html>";

pub struct Fixture {
    pub dir: TempDir,
    pub cfg: Config,
}

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).expect("write fixture");
}

pub fn fixture() -> Fixture {
    fixture_with(TRANSPOWER_SITES, TRANSPOWER_LINES)
}

pub fn fixture_with(sites: &str, lines: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "Sites.csv", sites);
    write(root, "Transmission_Lines.csv", lines);
    write(root, "zone_substations.csv", VECTOR_SITES);
    write(root, "feeders.csv", VECTOR_FEEDERS);
    fs::create_dir(root.join("static")).expect("static dir");
    write(&root.join("static"), "index.html", INDEX_HTML);

    let cfg = Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            enable_cors: false,
            request_timeout_secs: 30,
        },
        data: DataConfig {
            transpower_sites: root.join("Sites.csv"),
            transpower_lines: root.join("Transmission_Lines.csv"),
            vector_sites: root.join("zone_substations.csv"),
            vector_feeders: root.join("feeders.csv"),
            static_dir: root.join("static"),
        },
        network: NetworkConfig::default(),
        logging: LoggingConfig::default(),
    };

    Fixture { dir, cfg }
}
