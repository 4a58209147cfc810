use std::error::Error;

use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use qrpayload::{classify, PayloadRecord};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let scans: Vec<String> = std::env::args().skip(1).collect();
    if scans.is_empty() {
        eprintln!("usage: qrpayload <scanned text>...");
        return Ok(());
    }
    info!(target: "qrpayload", "Classifying {} scan(s)", scans.len());

    let now = OffsetDateTime::now_utc();
    for scan in &scans {
        let payload = classify(scan);
        let record = serde_json::to_string(&PayloadRecord::from(&payload))?;
        println!("kind:   {}", payload.kind());
        println!("name:   {}", payload.default_name(now));
        println!("string: {}", payload.formatted_string().replace('\n', "\\n"));
        println!("record: {record}");
        println!();
    }

    Ok(())
}
