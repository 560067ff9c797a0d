//! Dataset, configuration and logging setup shared by both binaries.
//!
//! The bundled sample is a 3 × 2 grid of streets around Calle Mayor in
//! central Madrid, 100 m between crossings, with one address per street.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sr_network::{load_addresses_reader, load_intersections_reader};
use sr_route::{Dataset, PlannerConfig};

const SAMPLE_INTERSECTIONS_CSV: &str = "\
x_cm,y_cm,street,crossing_street,longitude,latitude,street_code\n\
44110000,447470000,CALLE MAYOR,CALLE DE TOLEDO,-3.7090,40.4150,100\n\
44120000,447470000,CALLE MAYOR,CALLE DE POSTAS,-3.7078,40.4150,100\n\
44130000,447470000,CALLE MAYOR,AVENIDA DEL PRADO,-3.7066,40.4150,100\n\
44110000,447480000,CALLE DEL ARENAL,CALLE DE TOLEDO,-3.7090,40.4159,101\n\
44120000,447480000,CALLE DEL ARENAL,CALLE DE POSTAS,-3.7078,40.4159,101\n\
44130000,447480000,CALLE DEL ARENAL,AVENIDA DEL PRADO,-3.7066,40.4159,101\n\
44110000,447470000,CALLE DE TOLEDO,CALLE MAYOR,-3.7090,40.4150,200\n\
44110000,447480000,CALLE DE TOLEDO,CALLE DEL ARENAL,-3.7090,40.4159,200\n\
44120000,447470000,CALLE DE POSTAS,CALLE MAYOR,-3.7078,40.4150,201\n\
44120000,447480000,CALLE DE POSTAS,CALLE DEL ARENAL,-3.7078,40.4159,201\n\
44130000,447470000,AVENIDA DEL PRADO,CALLE MAYOR,-3.7066,40.4150,202\n\
44130000,447480000,AVENIDA DEL PRADO,CALLE DEL ARENAL,-3.7066,40.4159,202\n\
";

const SAMPLE_ADDRESSES_CSV: &str = "\
street_code,street_class,street_particle,street_name,number_literal,x_cm,y_cm\n\
100,CALLE,,MAYOR,NUM0001,44110500,447470300\n\
101,CALLE,DEL,ARENAL,NUM0010,44129600,447480200\n\
200,CALLE,DE,TOLEDO,NUM0005,44109800,447475000\n\
201,CALLE,DE,POSTAS,NUM0002,44120200,447474000\n\
202,AVENIDA,DEL,PRADO,NUM0002,44130300,447470100\n\
";

/// Load both CSV files, or the bundled sample when neither is given.
pub fn load_dataset(intersections: Option<&Path>, addresses: Option<&Path>) -> Result<Dataset> {
    match (intersections, addresses) {
        (Some(i), Some(a)) => Dataset::load(i, a)
            .with_context(|| format!("failed to load {} and {}", i.display(), a.display())),
        (None, None) => Ok(Dataset::new(
            load_intersections_reader(Cursor::new(SAMPLE_INTERSECTIONS_CSV))?,
            load_addresses_reader(Cursor::new(SAMPLE_ADDRESSES_CSV))?,
        )),
        _ => bail!("--intersections and --addresses must be given together"),
    }
}

/// Read a JSON `PlannerConfig`; defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config in {}", path.display()))
}

/// `RUST_LOG`-driven subscriber, `info` when unset.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
