use saftlib::{
    config::ReconcileConfig,
    formats::csv::Csv,
    pipeline::Reconciliation,
    traits::WriteFormat,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // SAF-T из stdin → отчёт в stderr, таблица движения в stdout
    let rec = Reconciliation::from_reader(
        std::io::BufReader::new(std::io::stdin()),
        &ReconcileConfig::default(),
    )?;
    eprint!("{}", rec.report);
    Csv::write(std::io::stdout(), &rec.movement)?;
    Ok(())
}
